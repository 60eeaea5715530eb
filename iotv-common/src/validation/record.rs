//! Persisted-side view of a device configuration

use serde_json::Value;

use super::{TemperatureInput, ValidationError};

/// The (temperature, status) pair stored for the latest configuration
///
/// Named replacement for the positional row `SELECT target_temp, status`
/// returns; [`PersistedRecord::from_row`] keeps the column-order contract.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedRecord {
    pub temperature: TemperatureInput,
    pub status: String,
}

impl PersistedRecord {
    pub fn new(temperature: impl Into<TemperatureInput>, status: impl Into<String>) -> Self {
        Self {
            temperature: temperature.into(),
            status: status.into(),
        }
    }

    /// Build from a positional row: column 0 temperature, column 1 status
    ///
    /// An empty row means nothing was persisted and yields `Ok(None)`.
    /// Extra columns are ignored.
    pub fn from_row(row: &[Value]) -> Result<Option<Self>, ValidationError> {
        match row {
            [] => Ok(None),
            [temperature, status, ..] => {
                let status = status.as_str().ok_or_else(|| ValidationError::MalformedRecord {
                    reason: format!("status column is not text: {}", status),
                })?;
                Ok(Some(Self::new(temperature, status)))
            }
            short => Err(ValidationError::MalformedRecord {
                reason: format!("expected 2 columns, got {}", short.len()),
            }),
        }
    }
}

impl From<(f64, String)> for PersistedRecord {
    fn from((temperature, status): (f64, String)) -> Self {
        Self::new(temperature, status)
    }
}
