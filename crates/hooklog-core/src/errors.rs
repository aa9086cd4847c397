//! Domain errors.

use thiserror::Error;

/// Domain error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid webhook payload: {source}")]
    InvalidPayload { source: serde_json::Error },

    #[error("Webhook payload should be a JSON object")]
    UnexpectedPayloadShape,

    #[error("Database error: {source}")]
    DatabaseError {
        source: hooklog_database_interface::DatabaseError,
    },
}

impl From<hooklog_database_interface::DatabaseError> for DomainError {
    fn from(e: hooklog_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T, E = DomainError> = core::result::Result<T, E>;
