pub mod catalog;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod server;
