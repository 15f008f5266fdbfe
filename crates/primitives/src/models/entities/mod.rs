pub mod enum_types;
pub mod payment_method;
pub mod receipt;
pub mod transfer;

pub use enum_types::*;
pub use payment_method::*;
pub use receipt::*;
pub use transfer::*;
