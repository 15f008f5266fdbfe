pub mod app_config;
pub mod catalog_details;
pub mod fee_details;
pub mod moncash_details;
pub mod paypal_details;
pub mod session_details;

pub use app_config::*;
pub use catalog_details::*;
pub use fee_details::*;
pub use moncash_details::*;
pub use paypal_details::*;
pub use session_details::*;
