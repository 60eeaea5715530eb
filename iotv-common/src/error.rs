//! Common error types for the IoT validation fixture

use thiserror::Error;

/// Common result type for infrastructure operations
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure errors shared by the device service and its test harness
///
/// Assertion failures are reported through
/// [`ValidationError`](crate::validation::ValidationError) instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data does not have the shape the validators expect
    #[error("Validation error: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
