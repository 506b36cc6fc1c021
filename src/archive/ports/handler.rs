//! Handler port for namespaced request dispatch.
//!
//! Each handler declares the qualified payload name it answers; the
//! [`HandlerRegistry`](crate::archive::services::HandlerRegistry) routes
//! requests by that name.

use crate::archive::{
    domain::{Jid, RetrievalQuery, RetrievalReply},
    error::StanzaError,
};
use async_trait::async_trait;
use std::fmt;

/// Namespace and element name identifying a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    namespace: String,
    element: String,
}

impl QualifiedName {
    /// Creates a qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            element: element.into(),
        }
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the element name.
    #[must_use]
    pub fn element(&self) -> &str {
        &self.element
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.element)
    }
}

/// Parsed request payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IqQuery {
    /// A conversation retrieval, tagged with the name it arrived under.
    Retrieve {
        /// The payload's qualified name.
        name: QualifiedName,
        /// The parsed query.
        query: RetrievalQuery,
    },
}

impl IqQuery {
    /// Returns the qualified name the payload arrived under.
    #[must_use]
    pub const fn qualified_name(&self) -> &QualifiedName {
        match self {
            Self::Retrieve { name, .. } => name,
        }
    }
}

/// Result payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IqResult {
    /// A rendered conversation page.
    Chat(RetrievalReply),
}

/// A request routed to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IqRequest {
    /// The full address of the requesting session.
    pub from: Jid,
    /// The parsed payload.
    pub payload: IqQuery,
}

/// Capability implemented by every request handler.
#[async_trait]
pub trait IqHandler: Send + Sync {
    /// Returns a human-readable handler name.
    fn name(&self) -> &str;

    /// Returns the payload name this handler answers.
    fn qualified_name(&self) -> &QualifiedName;

    /// Handles a request.
    ///
    /// # Errors
    ///
    /// Returns the [`StanzaError`] condition to reply with.
    async fn handle(&self, request: IqRequest) -> Result<IqResult, StanzaError>;
}
