//! Inbound retrieval queries and outbound reply payloads.

use super::datetime::serialize_xmpp_datetime;
use super::{BareJid, EncodedEntry, Jid, PaginationRequest, PaginationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed request to retrieve one archived conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalQuery {
    /// The correspondent whose conversation is requested.
    pub correspondent: Jid,

    /// Start time identifying the conversation.
    pub start: DateTime<Utc>,

    /// Optional result set management fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationRequest>,
}

impl RetrievalQuery {
    /// Creates an unpaginated query.
    #[must_use]
    pub const fn new(correspondent: Jid, start: DateTime<Utc>) -> Self {
        Self {
            correspondent,
            start,
            pagination: None,
        }
    }

    /// Attaches pagination fields.
    #[must_use]
    pub const fn with_pagination(mut self, pagination: PaginationRequest) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// The payload returned for a successful retrieval.
///
/// `pagination` is present exactly when the query carried pagination
/// fields, even if the page is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrievalReply {
    /// The conversation's correspondent in bare form.
    pub correspondent: BareJid,

    /// When the conversation started.
    #[serde(serialize_with = "serialize_xmpp_datetime")]
    pub conversation_start: DateTime<Utc>,

    /// Rendered entries in chronological order.
    pub entries: Vec<EncodedEntry>,

    /// Result set metadata, when pagination was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationResult>,
}
