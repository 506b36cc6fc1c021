//! Error types for conversation retrieval.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Only
//! [`RetrievalError::ItemNotFound`] is an expected outcome; pagination input
//! never produces an error.

use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the persistence collaborator.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// A stored conversation could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The store could not be reached.
    #[error("connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a database error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

/// Errors raised while retrieving a conversation.
#[derive(Debug, Clone, Error)]
pub enum RetrievalError {
    /// No conversation matched the requester, correspondent, and start time.
    #[error("conversation not found")]
    ItemNotFound,

    /// The persistence collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Stanza error conditions a handler may answer with.
///
/// Only the condition is decided here; building the error element is the
/// transport's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StanzaError {
    /// The requested item does not exist.
    #[error("item-not-found")]
    ItemNotFound,

    /// The request payload was not understood by the handler.
    #[error("bad-request")]
    BadRequest,

    /// No handler is registered for the request payload.
    #[error("service-unavailable")]
    ServiceUnavailable,

    /// The handler failed for reasons outside the request.
    #[error("internal-server-error")]
    InternalServerError,
}

impl StanzaError {
    /// Returns the defined condition name.
    #[must_use]
    pub const fn condition(&self) -> &'static str {
        match self {
            Self::ItemNotFound => "item-not-found",
            Self::BadRequest => "bad-request",
            Self::ServiceUnavailable => "service-unavailable",
            Self::InternalServerError => "internal-server-error",
        }
    }
}

impl From<RetrievalError> for StanzaError {
    fn from(err: RetrievalError) -> Self {
        match err {
            RetrievalError::ItemNotFound => Self::ItemNotFound,
            RetrievalError::Repository(_) => Self::InternalServerError,
        }
    }
}

/// Errors raised when loading retrieval configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field was present but empty.
    #[error("configuration field '{0}' must not be empty")]
    EmptyField(&'static str),
}
