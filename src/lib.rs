pub mod api;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod fleet;
pub mod motion;
pub mod server;
pub mod utils;
