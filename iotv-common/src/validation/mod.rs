//! Assertion helpers used by device test suites
//!
//! Two independent checks:
//! - **Range validation**: a temperature must lie in the safe operating range
//!   [-40, 85] °C, inclusive on both ends.
//! - **Triangle verification**: the live `/api/status` payload and the most
//!   recently persisted `device_state` row must describe the same
//!   configuration (temperature within 0.001, identical status).
//!
//! Both checks are synchronous and keep no state between calls. Successful
//! checks emit one informational line through a [`TraceSink`]; failures emit
//! nothing and carry their diagnostics in the returned [`ValidationError`].
//!
//! # Example
//! ```
//! use iotv_common::validation::{PersistedRecord, Validator};
//! use serde_json::json;
//!
//! let validator = Validator::new();
//! assert_eq!(validator.validate_temperature_range("25.5").unwrap(), 25.5);
//!
//! let api = json!({"target_temperature": 25.5, "status": "CONFIGURED"});
//! let row = PersistedRecord::new(25.5, "CONFIGURED");
//! assert!(validator.verify_data_consistency(&api, Some(&row)).is_ok());
//! ```

mod consistency;
mod error;
mod input;
mod range;
mod record;
mod sink;

pub use consistency::TEMPERATURE_TOLERANCE;
pub use error::ValidationError;
pub use input::TemperatureInput;
pub use range::{is_within_safe_range, SAFE_MAX_CELSIUS, SAFE_MIN_CELSIUS};
pub use record::PersistedRecord;
pub use sink::{MemorySink, TraceSink, TracingSink};

use serde_json::Value;

/// Runs validation checks and reports successes to a [`TraceSink`]
#[derive(Debug, Clone, Default)]
pub struct Validator<S = TracingSink> {
    sink: S,
}

impl Validator {
    /// Validator that reports through `tracing`
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: TraceSink> Validator<S> {
    /// Validator that reports through a caller-supplied sink
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Check `value` against the safe operating range, logging through `tracing`
///
/// Returns the converted temperature on success.
pub fn validate_temperature_range(
    value: impl Into<TemperatureInput>,
) -> Result<f64, ValidationError> {
    Validator::new().validate_temperature_range(value)
}

/// Compare an `/api/status` payload with the latest persisted record,
/// logging through `tracing`
pub fn verify_data_consistency(
    api_response: &Value,
    persisted: Option<&PersistedRecord>,
) -> Result<(), ValidationError> {
    Validator::new().verify_data_consistency(api_response, persisted)
}
