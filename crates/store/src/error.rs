//! Store error types

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend unreachable or refusing reads
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored timestamp could not be parsed
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
