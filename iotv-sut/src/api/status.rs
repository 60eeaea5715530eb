//! Device status read-back

use axum::{extract::State, Json};
use iotv_common::db::latest_device_state;
use serde::Serialize;

use crate::{ApiError, ApiResult, AppState};

/// Latest persisted configuration, keyed the way test suites read it
#[derive(Debug, Serialize)]
pub struct DeviceStatusResponse {
    pub target_temperature: Option<f64>,
    pub firmware_version: Option<String>,
    pub status: Option<String>,
    pub last_update: Option<String>,
}

/// GET /api/status
///
/// Returns the most recently stored row. An empty store answers 404 with
/// `{"status": "No data available"}` so absence is never confused with a
/// stored record.
pub async fn get_status(State(state): State<AppState>) -> ApiResult<Json<DeviceStatusResponse>> {
    let row = latest_device_state(&state.db)
        .await?
        .ok_or(ApiError::NoData)?;

    Ok(Json(DeviceStatusResponse {
        target_temperature: row.target_temp,
        firmware_version: row.firmware_version,
        status: row.status,
        last_update: row.updated_at,
    }))
}
