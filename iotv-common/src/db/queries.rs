//! Reads and writes against `device_state`

use crate::validation::{PersistedRecord, ValidationError};
use crate::Result;
use sqlx::SqlitePool;

use super::DeviceState;

/// Append a configuration row and return its id
pub async fn insert_configuration(
    pool: &SqlitePool,
    target_temp: f64,
    firmware_version: &str,
    status: &str,
) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO device_state (target_temp, firmware_version, status) VALUES (?, ?, ?)",
    )
    .bind(target_temp)
    .bind(firmware_version)
    .bind(status)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Most recent row, or `None` if nothing has been configured yet
pub async fn latest_device_state(pool: &SqlitePool) -> Result<Option<DeviceState>> {
    let row = sqlx::query_as::<_, (i64, Option<f64>, Option<String>, Option<String>, Option<String>)>(
        "SELECT id, target_temp, firmware_version, status, updated_at
         FROM device_state ORDER BY id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(row.map(
        |(id, target_temp, firmware_version, status, updated_at)| DeviceState {
            id,
            target_temp,
            firmware_version,
            status,
            updated_at,
        },
    ))
}

/// Latest `(target_temp, status)` pair in the shape the consistency check expects
///
/// Both columns are nullable; a NULL in the latest row is reported as
/// [`ValidationError::MalformedRecord`] rather than a decode failure.
pub async fn latest_persisted_record(pool: &SqlitePool) -> Result<Option<PersistedRecord>> {
    let row = sqlx::query_as::<_, (Option<f64>, Option<String>)>(
        "SELECT target_temp, status FROM device_state ORDER BY id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    match row {
        None => Ok(None),
        Some((Some(target_temp), Some(status))) => {
            Ok(Some(PersistedRecord::from((target_temp, status))))
        }
        Some((target_temp, status)) => Err(ValidationError::MalformedRecord {
            reason: format!(
                "NULL column in latest row (target_temp={:?}, status={:?})",
                target_temp, status
            ),
        }
        .into()),
    }
}

/// Number of stored configurations
pub async fn count_device_states(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM device_state")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
