//! Configuration write endpoint
//!
//! Applies the same safe operating range as the test-side validator and
//! rejects bad input before anything is written.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use iotv_common::db::{insert_configuration, STATUS_CONFIGURED};
use iotv_common::time::local_iso_timestamp;
use iotv_common::validation::{is_within_safe_range, TemperatureInput};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::{ApiError, ApiResult, AppState};

/// Firmware recorded when the request does not name one
pub const DEFAULT_FIRMWARE_VERSION: &str = "v1.0";

/// Validated body of `POST /api/config`
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRequest {
    pub target_temp: f64,
    pub firmware_version: String,
}

impl ConfigRequest {
    /// Validate a raw JSON body
    ///
    /// Temperature problems are reported before firmware problems.
    pub fn from_json(body: &Value) -> ApiResult<Self> {
        let fields = body
            .as_object()
            .ok_or_else(|| bad_request("Request body must be a JSON object"))?;

        let raw_temp = fields
            .get("target_temperature")
            .filter(|value| !value.is_null())
            .ok_or_else(|| bad_request("Missing target_temperature"))?;

        let target_temp = TemperatureInput::from(raw_temp)
            .to_celsius()
            .map_err(|_| bad_request("target_temperature must be a number"))?;

        if !is_within_safe_range(target_temp) {
            return Err(bad_request("Temperature out of range (-40 to 85)"));
        }

        let firmware_version = match fields.get("firmware_version") {
            None | Some(Value::Null) => DEFAULT_FIRMWARE_VERSION.to_string(),
            Some(Value::String(version)) => version.clone(),
            Some(_) => return Err(bad_request("firmware_version must be a string")),
        };

        Ok(Self {
            target_temp,
            firmware_version,
        })
    }
}

/// Acknowledgment returned for an accepted configuration
#[derive(Debug, Serialize)]
pub struct ConfigAccepted {
    pub message: String,
    pub configured_temp: f64,
    pub timestamp: String,
}

/// POST /api/config
pub async fn set_config(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ConfigAccepted>> {
    let Json(body) = payload.map_err(|rejection| bad_request(&rejection.body_text()))?;

    let request = ConfigRequest::from_json(&body).inspect_err(|err| {
        debug!("Rejected configuration {}: {}", body, err);
    })?;

    let id = insert_configuration(
        &state.db,
        request.target_temp,
        &request.firmware_version,
        STATUS_CONFIGURED,
    )
    .await?;

    info!(
        "Configuration {} accepted: target_temp={} firmware={}",
        id, request.target_temp, request.firmware_version
    );

    Ok(Json(ConfigAccepted {
        message: "Configuration accepted".to_string(),
        configured_temp: request.target_temp,
        timestamp: local_iso_timestamp(),
    }))
}

fn bad_request(message: &str) -> ApiError {
    ApiError::BadRequest(message.to_string())
}
