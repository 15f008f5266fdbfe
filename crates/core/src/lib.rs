pub mod app_state;
pub mod clients;
pub mod events;
pub mod pricing;
pub mod services;
pub mod sessions;
pub mod wizard;

pub use app_state::AppState;
pub use events::{PaymentEvent, PaymentEvents};
pub use pricing::Pricing;
pub use wizard::TransferWizard;
