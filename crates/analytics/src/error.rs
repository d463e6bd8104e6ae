//! Retention error types

use thiserror::Error;

/// Retention computation errors
#[derive(Debug, Error)]
pub enum RetentionError {
    /// Registry or event store unreachable; the computation aborts rather
    /// than rendering a partial report
    #[error("data unavailable: {0}")]
    DataUnavailable(#[from] retain_store::StoreError),

    /// Invalid reporting window
    #[error("invalid window: {0}")]
    InvalidWindow(String),
}

/// Result type for retention operations
pub type Result<T> = std::result::Result<T, RetentionError>;
