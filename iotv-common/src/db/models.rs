//! Database models

use serde::{Deserialize, Serialize};

/// Status written with every accepted configuration
pub const STATUS_CONFIGURED: &str = "CONFIGURED";

/// One row of `device_state`
///
/// Columns are nullable in the schema, so everything except the id is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    pub id: i64,
    pub target_temp: Option<f64>,
    pub firmware_version: Option<String>,
    pub status: Option<String>,
    pub updated_at: Option<String>,
}
