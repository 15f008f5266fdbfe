pub mod catalog_dto;
pub mod payment_dto;
pub mod providers;
pub mod quote_dto;
pub mod system_dto;
pub mod transfer_dto;

pub use catalog_dto::*;
pub use payment_dto::*;
pub use providers::*;
pub use quote_dto::*;
pub use system_dto::*;
pub use transfer_dto::*;
