// Central Error Type for the Query Layer

use thiserror::Error;

/// Application-level error type
///
/// A missing row is never an error: singular finders return `Ok(None)` and
/// plural finders return an empty `Vec`. Everything here is a failure the
/// caller has to deal with.
#[derive(Error, Debug)]
pub enum AppError {
    /// Connection or query execution failure reported by the store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Store could not be configured (bad URL, bad options)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Storage(String)
