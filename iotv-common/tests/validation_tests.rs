//! Behavioural tests for the range validator and triangle verification
//!
//! Covers the boundary, ordering and idempotence guarantees test suites rely on.

use iotv_common::validation::{
    MemorySink, PersistedRecord, ValidationError, Validator, SAFE_MAX_CELSIUS, SAFE_MIN_CELSIUS,
};
use iotv_common::{validate_temperature_range, verify_data_consistency};
use serde_json::json;

fn capturing() -> Validator<MemorySink> {
    Validator::with_sink(MemorySink::new())
}

// =============================================================================
// Range Validator
// =============================================================================

#[test]
fn test_values_across_range_accepted() {
    let validator = capturing();
    let mut value = SAFE_MIN_CELSIUS;
    while value <= SAFE_MAX_CELSIUS {
        assert_eq!(validator.validate_temperature_range(value), Ok(value));
        value += 2.5;
    }
}

#[test]
fn test_values_outside_range_rejected() {
    let validator = capturing();
    for value in [-1000.0, -40.5, 85.5, 150.0, f64::INFINITY] {
        let err = validator.validate_temperature_range(value).unwrap_err();
        assert!(
            matches!(err, ValidationError::RangeViolation { value: v, .. } if v == value),
            "Expected range violation for {}, got {:?}",
            value,
            err
        );
    }
    assert!(validator.sink().is_empty());
}

#[test]
fn test_boundary_exactness() {
    assert_eq!(validate_temperature_range(-40.0), Ok(-40.0));
    assert_eq!(validate_temperature_range(85.0), Ok(85.0));
    assert_eq!(validate_temperature_range("-40"), Ok(-40.0));
    assert_eq!(validate_temperature_range("85"), Ok(85.0));

    for value in [-40.0001, 85.0001, -40.0 - f64::EPSILON * 64.0, 85.0 + f64::EPSILON * 64.0] {
        assert!(matches!(
            validate_temperature_range(value),
            Err(ValidationError::RangeViolation { .. })
        ));
    }
}

#[test]
fn test_violation_message_names_value_and_bounds() {
    let err = validate_temperature_range(100.0).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("100"));
    assert!(message.contains("-40"));
    assert!(message.contains("85"));
}

#[test]
fn test_non_numeric_is_conversion_error() {
    assert_eq!(
        validate_temperature_range("abc"),
        Err(ValidationError::Conversion {
            input: "abc".to_string()
        })
    );
}

#[test]
fn test_json_number_and_string_inputs() {
    assert_eq!(validate_temperature_range(&json!(22)), Ok(22.0));
    assert_eq!(validate_temperature_range(&json!("22.75")), Ok(22.75));
    assert!(matches!(
        validate_temperature_range(&json!(false)),
        Err(ValidationError::Conversion { .. })
    ));
}

// =============================================================================
// Triangle Verification
// =============================================================================

#[test]
fn test_missing_record() {
    assert_eq!(
        verify_data_consistency(&json!({}), None),
        Err(ValidationError::MissingRecord)
    );
}

#[test]
fn test_empty_positional_row_is_missing_record() {
    let record = PersistedRecord::from_row(&[]).unwrap();
    assert_eq!(
        verify_data_consistency(&json!({}), record.as_ref()),
        Err(ValidationError::MissingRecord)
    );
}

#[test]
fn test_both_fields_absent() {
    let record = PersistedRecord::new(25.5, "CONFIGURED");
    let err = verify_data_consistency(&json!({}), Some(&record)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingField {
            payload: "{}".to_string()
        }
    );
    assert_eq!(err.to_string(), "Critical data missing in API response! JSON: {}");
}

#[test]
fn test_exact_match() {
    let validator = capturing();
    let record = PersistedRecord::new(25.5, "CONFIGURED");
    let api = json!({"target_temperature": 25.5, "status": "CONFIGURED"});
    assert_eq!(validator.verify_data_consistency(&api, Some(&record)), Ok(()));
    assert_eq!(validator.sink().lines().len(), 1);
}

#[test]
fn test_match_within_tolerance() {
    let record = PersistedRecord::new(25.5, "CONFIGURED");
    let api = json!({"target_temperature": 25.5006, "status": "CONFIGURED"});
    assert!(verify_data_consistency(&api, Some(&record)).is_ok());
}

#[test]
fn test_temperature_mismatch_names_api_value_first() {
    let record = PersistedRecord::new(25.5, "CONFIGURED");
    let api = json!({"target_temperature": 25.6, "status": "CONFIGURED"});
    let err = verify_data_consistency(&api, Some(&record)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TemperatureMismatch {
            api: 25.6,
            persisted: 25.5,
        }
    );
    let message = err.to_string();
    let api_pos = message.find("25.6").unwrap();
    let db_pos = message.find("25.5").unwrap();
    assert!(api_pos < db_pos, "API value must come first: {}", message);
}

#[test]
fn test_status_mismatch_names_api_value_first() {
    let record = PersistedRecord::new(25.5, "CONFIGURED");
    let api = json!({"target_temperature": 25.5, "status": "PENDING"});
    let err = verify_data_consistency(&api, Some(&record)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::StatusMismatch {
            api: "PENDING".to_string(),
            persisted: "CONFIGURED".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Status Mismatch! API says 'PENDING', but DB says 'CONFIGURED'"
    );
}

#[test]
fn test_status_endpoint_shape_with_positional_row() {
    // Shape produced by GET /api/status plus the row a DB query returns
    let api = json!({
        "target_temperature": 21.0,
        "firmware_version": "v2.3",
        "status": "CONFIGURED",
        "last_update": "2026-10-19 08:00:00"
    });
    let row = [json!(21.0), json!("CONFIGURED")];
    let record = PersistedRecord::from_row(&row).unwrap();
    assert!(verify_data_consistency(&api, record.as_ref()).is_ok());
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_repeated_calls_identical_outcomes() {
    let validator = capturing();
    let record = PersistedRecord::new(25.5, "CONFIGURED");
    let good = json!({"target_temperature": 25.5, "status": "CONFIGURED"});
    let bad = json!({"target_temperature": 25.6, "status": "CONFIGURED"});

    for _ in 0..2 {
        assert_eq!(validator.validate_temperature_range(30.0), Ok(30.0));
        assert_eq!(
            validator.validate_temperature_range(90.0),
            validator.validate_temperature_range(90.0)
        );
        assert_eq!(validator.verify_data_consistency(&good, Some(&record)), Ok(()));
        assert_eq!(
            validator.verify_data_consistency(&bad, Some(&record)),
            validator.verify_data_consistency(&bad, Some(&record))
        );
    }

    // Two range successes and two consistency successes, nothing else
    assert_eq!(validator.sink().lines().len(), 4);
}
