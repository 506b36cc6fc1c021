//! In-memory implementation of the `ConversationRepository` port.
//!
//! Provides a simple, thread-safe archive for unit testing and embedding
//! without a message store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::archive::{
    domain::{BareJid, Conversation, Jid},
    error::RepositoryError,
    ports::repository::{ConversationRepository, RepositoryResult},
};

/// Lookup key: owner, bare correspondent, and start time.
type ConversationKey = (BareJid, BareJid, DateTime<Utc>);

/// In-memory implementation of [`ConversationRepository`].
///
/// Thread-safe via internal [`RwLock`]. Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryConversationRepository {
    conversations: Arc<RwLock<HashMap<ConversationKey, Conversation>>>,
}

impl InMemoryConversationRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Archives a conversation, replacing any with the same owner,
    /// correspondent, and start time.
    ///
    /// Returns the replaced conversation, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] if the storage lock is poisoned.
    pub fn insert(&self, conversation: Conversation) -> RepositoryResult<Option<Conversation>> {
        let key = (
            conversation.owner().clone(),
            conversation.with().clone(),
            conversation.start(),
        );
        let mut guard = self
            .conversations
            .write()
            .map_err(|e| RepositoryError::database(std::io::Error::other(e.to_string())))?;

        Ok(guard.insert(key, conversation))
    }

    /// Returns the number of archived conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations
            .read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns `true` if no conversations are archived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn get_conversation(
        &self,
        owner: BareJid,
        with: Jid,
        start: DateTime<Utc>,
    ) -> RepositoryResult<Option<Conversation>> {
        let guard = self
            .conversations
            .read()
            .map_err(|e| RepositoryError::database(std::io::Error::other(e.to_string())))?;

        Ok(guard.get(&(owner, with.to_bare(), start)).cloned())
    }
}
