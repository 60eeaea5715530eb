//! Assertion failures reported by the validators

use thiserror::Error;

/// Reason a validation check failed
///
/// Messages are stable so test suites can match on them. Mismatch variants
/// always state the API value before the persisted value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input could not be interpreted as a real number
    #[error("Could not convert '{input}' to a number")]
    Conversion { input: String },

    /// Temperature outside the safe operating range
    #[error("Safety Violation: Temperature {value:?} out of range ({min} to {max}).")]
    RangeViolation { value: f64, min: f64, max: f64 },

    /// No persisted record to compare against
    #[error("Database record is missing! Persistence failed.")]
    MissingRecord,

    /// Persisted row does not have the (temperature, status) shape
    #[error("Database record is malformed: {reason}")]
    MalformedRecord { reason: String },

    /// `target_temperature` or `status` absent from the API payload
    #[error("Critical data missing in API response! JSON: {payload}")]
    MissingField { payload: String },

    /// Temperatures differ by more than the tolerance
    #[error("Data Mismatch! API says temp={api:?}, but DB says temp={persisted:?}")]
    TemperatureMismatch { api: f64, persisted: f64 },

    /// Status strings differ
    #[error("Status Mismatch! API says '{api}', but DB says '{persisted}'")]
    StatusMismatch { api: String, persisted: String },
}
