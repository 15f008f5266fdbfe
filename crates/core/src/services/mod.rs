pub mod catalog_service;
pub mod payment_service;
pub mod quote_service;
pub mod wizard_service;
