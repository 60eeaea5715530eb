//! Timestamp utilities

use chrono::Local;

/// Current local wall-clock time as ISO-8601 without offset
///
/// Matches the acknowledgment format of the configuration endpoint,
/// e.g. `2026-10-19T14:03:27.512345`.
pub fn local_iso_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
