//! HTTP API handlers for iotv-sut

pub mod config;
pub mod health;
pub mod status;

pub use config::set_config;
pub use health::health_routes;
pub use status::get_status;
