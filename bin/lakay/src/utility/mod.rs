pub mod clean_up_tasks;
pub mod logging;
pub mod server;
pub mod shutdown;
pub mod tasks;
