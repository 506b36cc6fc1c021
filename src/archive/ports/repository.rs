//! Repository port for archived conversation lookup.
//!
//! Defines the abstract interface the retrieval service uses to fetch a
//! conversation snapshot, allowing different persistence implementations.

use crate::archive::{
    domain::{BareJid, Conversation, Jid},
    error::RepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for fetching archived conversations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Returned messages are in chronological order
/// - The returned conversation is a snapshot that later writes do not alter
/// - Concurrent access is handled safely
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Fetches the conversation `owner` had with `with` starting at `start`.
    ///
    /// Returns `None` if no such conversation is archived.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the lookup itself fails.
    async fn get_conversation(
        &self,
        owner: BareJid,
        with: Jid,
        start: DateTime<Utc>,
    ) -> RepositoryResult<Option<Conversation>>;
}
