//! Error types for the registry and attribute parsing.

use crate::class::ClassId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the registry and attribute parsing.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An archetype definition failed validation at registration time.
    #[error("invalid class \"{id}\": {reason}")]
    InvalidData {
        /// The identifier the definition was registered under.
        id: ClassId,
        /// What was wrong with the definition.
        reason: String,
    },

    /// An archetype with the same identifier is already registered.
    #[error("class already registered: \"{0}\"")]
    DuplicateId(ClassId),

    /// The requested archetype identifier is not registered.
    #[error("unknown class: \"{0}\"")]
    UnknownClass(ClassId),

    /// An attribute key is not one of the recognized keys.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A `key=value` modifier could not be parsed.
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),

    /// A class definition document is not valid JSON for the expected shape.
    #[error("invalid class definitions: {0}")]
    Json(#[from] serde_json::Error),
}
