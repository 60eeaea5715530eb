//! Safe operating range check

use super::{TemperatureInput, TraceSink, ValidationError, Validator};

/// Lowest temperature the simulated hardware tolerates (°C, inclusive)
pub const SAFE_MIN_CELSIUS: f64 = -40.0;

/// Highest temperature the simulated hardware tolerates (°C, inclusive)
pub const SAFE_MAX_CELSIUS: f64 = 85.0;

/// True if `celsius` lies in [-40, 85]; NaN is never in range
pub fn is_within_safe_range(celsius: f64) -> bool {
    (SAFE_MIN_CELSIUS..=SAFE_MAX_CELSIUS).contains(&celsius)
}

impl<S: TraceSink> Validator<S> {
    /// Check that `value` converts to a number inside the safe operating range
    ///
    /// Conversion runs first, so `"abc"` yields [`ValidationError::Conversion`]
    /// rather than a range violation. Returns the converted temperature.
    pub fn validate_temperature_range(
        &self,
        value: impl Into<TemperatureInput>,
    ) -> Result<f64, ValidationError> {
        let celsius = value.into().to_celsius()?;

        if !is_within_safe_range(celsius) {
            return Err(ValidationError::RangeViolation {
                value: celsius,
                min: SAFE_MIN_CELSIUS,
                max: SAFE_MAX_CELSIUS,
            });
        }

        self.sink.info(&format!(
            "Temperature {:?} is within the safe operating range.",
            celsius
        ));
        Ok(celsius)
    }
}
