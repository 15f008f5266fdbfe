pub mod catalog;
pub mod health;
pub mod payment_methods;
pub mod payments;
pub mod quote;
pub mod transfer_session;
pub mod transfer_steps;
pub mod update_transfer;
