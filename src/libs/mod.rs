pub mod branch;
pub mod config;
pub mod logging;
pub mod messages;
