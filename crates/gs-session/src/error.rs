//! Error types for sessions and roll logs.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Registry or composition error.
    #[error("{0}")]
    Core(#[from] gs_core::CoreError),

    /// A roll log or configuration document could not be read.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}
