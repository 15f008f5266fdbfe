pub mod moncash;
pub mod paypal;

pub use moncash::*;
pub use paypal::*;
