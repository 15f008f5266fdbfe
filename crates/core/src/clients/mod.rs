pub mod catalog;
pub mod exchange_rate;
pub mod moncash;
pub mod paypal;

pub use catalog::CatalogClient;
pub use exchange_rate::ExchangeRateClient;
pub use moncash::MonCashClient;
pub use paypal::PayPalClient;
