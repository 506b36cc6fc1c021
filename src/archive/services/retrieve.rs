//! Conversation retrieval service and its request handler.

use crate::archive::{
    domain::{Jid, RetrievalQuery, RetrievalReply, encode, resolve},
    error::{RetrievalError, StanzaError},
    ports::{ConversationRepository, IqHandler, IqQuery, IqRequest, IqResult, QualifiedName},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::RetrievalConfig;

/// Result type for retrieval operations.
pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// Fetches an archived conversation and renders one page of it.
#[derive(Clone)]
pub struct RetrieveService<R>
where
    R: ConversationRepository,
{
    repository: Arc<R>,
}

impl<R> RetrieveService<R>
where
    R: ConversationRepository,
{
    /// Creates a new retrieval service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the page of a conversation described by `query`.
    ///
    /// The conversation is looked up under the requester's bare address and
    /// fetched once; the page is resolved and encoded from that snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::ItemNotFound`] if no conversation matches,
    /// or [`RetrievalError::Repository`] if the lookup fails.
    pub async fn retrieve(
        &self,
        requester: &Jid,
        query: &RetrievalQuery,
    ) -> RetrievalResult<RetrievalReply> {
        debug!(
            requester = %requester,
            with = %query.correspondent,
            start = %query.start,
            "processing a request to retrieve a conversation"
        );

        let conversation = self
            .repository
            .get_conversation(requester.to_bare(), query.correspondent.clone(), query.start)
            .await
            .inspect_err(|error| warn!(%error, "conversation lookup failed"))?
            .ok_or_else(|| {
                debug!("unable to find conversation");
                RetrievalError::ItemNotFound
            })?;

        let total = conversation.message_count();
        let (window, pagination) = resolve(total, query.pagination.as_ref());
        debug!(
            messages = total,
            from_index = window.from_index(),
            to_index = window.to_index(),
            "found conversation"
        );

        let entries = encode(
            conversation.start(),
            conversation.with(),
            window.slice(conversation.messages()),
        )
        .collect();

        Ok(RetrievalReply {
            correspondent: conversation.with().clone(),
            conversation_start: conversation.start(),
            entries,
            pagination,
        })
    }
}

/// Request handler exposing [`RetrieveService`] under a configured name.
pub struct RetrieveHandler<R>
where
    R: ConversationRepository,
{
    service: RetrieveService<R>,
    name: String,
    qualified_name: QualifiedName,
}

impl<R> RetrieveHandler<R>
where
    R: ConversationRepository,
{
    /// Creates a handler answering the name given by `config`.
    #[must_use]
    pub fn new(service: RetrieveService<R>, config: &RetrievalConfig) -> Self {
        Self {
            service,
            name: config.handler_name.clone(),
            qualified_name: config.qualified_name(),
        }
    }
}

#[async_trait]
impl<R> IqHandler for RetrieveHandler<R>
where
    R: ConversationRepository,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }

    async fn handle(&self, request: IqRequest) -> Result<IqResult, StanzaError> {
        let IqRequest { from, payload } = request;
        let IqQuery::Retrieve { name, query } = payload;
        if name != self.qualified_name {
            debug!(payload = %name, handler = %self.name, "payload not understood");
            return Err(StanzaError::BadRequest);
        }

        let reply = self.service.retrieve(&from, &query).await?;
        Ok(IqResult::Chat(reply))
    }
}
