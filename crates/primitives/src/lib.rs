pub mod error;
pub mod fees;
pub mod models;
pub mod money;
pub mod utility;
