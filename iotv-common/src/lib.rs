//! # IoT Validation Common Library
//!
//! Shared code for the mock device service and the test suites that drive it:
//! - Temperature range and API/database consistency validation
//! - Database schema and queries for the device state store
//! - Configuration loading and root folder resolution
//! - Timestamp helpers

pub mod config;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;
pub mod time;
pub mod validation;

pub use error::{Error, Result};
pub use validation::{
    validate_temperature_range, verify_data_consistency, PersistedRecord, TemperatureInput,
    ValidationError, Validator,
};
