pub mod app;
pub mod configs;
pub mod error;
pub mod flows;
pub mod host;
pub mod logger;
pub mod server;
pub mod utils;
