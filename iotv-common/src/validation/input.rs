//! Loosely-typed temperature values
//!
//! Test suites hand temperatures over as numbers, numeric strings, or raw
//! JSON values. [`TemperatureInput`] captures what was supplied so conversion
//! failures can be reported separately from range or comparison failures.

use serde_json::Value;

use super::ValidationError;

/// A temperature as supplied by the caller, before conversion
#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureInput {
    /// Already numeric
    Number(f64),
    /// String that may hold a number, e.g. `"25.5"`
    Text(String),
    /// Any other JSON value (bool, array, object, null), kept as its JSON text
    Unsupported(String),
}

impl TemperatureInput {
    /// Convert to degrees Celsius
    ///
    /// Surrounding whitespace in text is ignored. `"inf"` and `"nan"` convert;
    /// the range and tolerance checks reject them later.
    pub fn to_celsius(&self) -> Result<f64, ValidationError> {
        match self {
            TemperatureInput::Number(value) => Ok(*value),
            TemperatureInput::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| ValidationError::Conversion {
                        input: text.clone(),
                    })
            }
            TemperatureInput::Unsupported(raw) => Err(ValidationError::Conversion {
                input: raw.clone(),
            }),
        }
    }
}

impl From<f64> for TemperatureInput {
    fn from(value: f64) -> Self {
        TemperatureInput::Number(value)
    }
}

impl From<i64> for TemperatureInput {
    fn from(value: i64) -> Self {
        TemperatureInput::Number(value as f64)
    }
}

impl From<i32> for TemperatureInput {
    fn from(value: i32) -> Self {
        TemperatureInput::Number(f64::from(value))
    }
}

impl From<&str> for TemperatureInput {
    fn from(value: &str) -> Self {
        TemperatureInput::Text(value.to_string())
    }
}

impl From<String> for TemperatureInput {
    fn from(value: String) -> Self {
        TemperatureInput::Text(value)
    }
}

impl From<&Value> for TemperatureInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(number) => match number.as_f64() {
                Some(n) => TemperatureInput::Number(n),
                None => TemperatureInput::Unsupported(number.to_string()),
            },
            Value::String(text) => TemperatureInput::Text(text.clone()),
            other => TemperatureInput::Unsupported(other.to_string()),
        }
    }
}

impl From<Value> for TemperatureInput {
    fn from(value: Value) -> Self {
        TemperatureInput::from(&value)
    }
}
