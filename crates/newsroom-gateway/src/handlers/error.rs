//! Handler error types

use newsroom_core::DomainError;
use thiserror::Error;

use crate::protocol::ParseError;

/// Message sent for faults the client cannot act on
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Frame could not be parsed into a request
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Domain error (from repositories)
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl HandlerError {
    /// The message carried by the ERROR event sent back to the sender
    ///
    /// Clients display these verbatim, so the wording is part of the
    /// protocol. Store faults collapse to a generic message.
    pub fn client_message(&self) -> String {
        match self {
            Self::Parse(ParseError::UnknownType(_)) => "Unknown message type".to_string(),
            Self::Parse(e) => e.to_string(),
            Self::Domain(DomainError::ArticleNotFound(_)) => "Article not found".to_string(),
            Self::Domain(DomainError::CategoryNotFound(_)) => "Category not found".to_string(),
            Self::Domain(DomainError::ValidationError(message)) => message.clone(),
            Self::Domain(DomainError::DuplicateReaction) => {
                "You have already reacted with this type.".to_string()
            }
            Self::Domain(DomainError::DatabaseError(_)) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;
