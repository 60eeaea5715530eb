//! Triangle verification: API response vs. persisted record
//!
//! # Check order
//! 1. Persisted record present
//! 2. Persisted temperature converts
//! 3. API payload has non-null `target_temperature` and `status`
//! 4. API temperature converts
//! 5. Temperatures agree within [`TEMPERATURE_TOLERANCE`]
//! 6. Statuses are identical strings
//!
//! The first failing check is returned. Structural problems (missing record,
//! missing field) always win over semantic ones.

use serde_json::Value;

use super::{PersistedRecord, TemperatureInput, TraceSink, ValidationError, Validator};

/// Largest absolute difference at which two temperatures are still equal
pub const TEMPERATURE_TOLERANCE: f64 = 0.001;

impl<S: TraceSink> Validator<S> {
    /// Verify that an `/api/status` payload matches the latest persisted record
    ///
    /// Pass `None` when the store returned no row.
    pub fn verify_data_consistency(
        &self,
        api_response: &Value,
        persisted: Option<&PersistedRecord>,
    ) -> Result<(), ValidationError> {
        let record = persisted.ok_or(ValidationError::MissingRecord)?;
        let persisted_temp = record.temperature.to_celsius()?;
        let persisted_status = record.status.as_str();

        let (Some(api_temp_raw), Some(api_status)) = (
            present_field(api_response, "target_temperature"),
            present_field(api_response, "status"),
        ) else {
            return Err(ValidationError::MissingField {
                payload: api_response.to_string(),
            });
        };
        let api_temp = TemperatureInput::from(api_temp_raw).to_celsius()?;

        if exceeds_tolerance(persisted_temp, api_temp) {
            return Err(ValidationError::TemperatureMismatch {
                api: api_temp,
                persisted: persisted_temp,
            });
        }

        // A JSON number never equals a stored string, even if it prints the same
        if api_status.as_str() != Some(persisted_status) {
            return Err(ValidationError::StatusMismatch {
                api: status_text(api_status),
                persisted: persisted_status.to_string(),
            });
        }

        self.sink
            .info("SUCCESS: API response matches Database persistence perfectly.");
        Ok(())
    }
}

/// Field value, treating JSON `null` as absent
fn present_field<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !value.is_null())
}

/// A NaN difference (e.g. inf vs. inf) never exceeds the tolerance
fn exceeds_tolerance(persisted: f64, api: f64) -> bool {
    (persisted - api).abs() > TEMPERATURE_TOLERANCE
}

fn status_text(status: &Value) -> String {
    match status {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
