use thiserror::Error;

use crate::types::identifier::Identifier;

/// Errors raised while building or converting ledger values. Wire-level
/// corruption is reported by prost before any of these types are involved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    /// An enum value was constructed without a constructor label
    #[error("Enum constructor cannot be empty")]
    EmptyConstructor,

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A required field was absent from a decoded wire message
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown constructor '{constructor}' for enum {enum_name}")]
    UnknownConstructor {
        enum_name: String,
        constructor: String,
    },

    #[error("Enum identifier mismatch: expected {expected}, got {actual}")]
    IdentifierMismatch {
        expected: Identifier,
        actual: Identifier,
    },

    /// Errors bubbling up from the protobuf decoder
    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

/// Result type alias for binding operations
pub type BindingResult<T> = Result<T, BindingError>;
