//! Routing of requests to handlers by payload name.

use crate::archive::{
    error::StanzaError,
    ports::{IqHandler, IqRequest, IqResult, QualifiedName},
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Maps payload names to the handlers that answer them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use scrollkeeper::archive::adapters::memory::InMemoryConversationRepository;
/// use scrollkeeper::archive::services::{
///     HandlerRegistry, RetrievalConfig, RetrieveHandler, RetrieveService,
/// };
///
/// let config = RetrievalConfig::default();
/// let service = RetrieveService::new(Arc::new(InMemoryConversationRepository::new()));
///
/// let mut registry = HandlerRegistry::new();
/// registry.register(Arc::new(RetrieveHandler::new(service, &config)));
/// assert!(registry.handler_for(&config.qualified_name()).is_some());
/// ```
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<QualifiedName, Arc<dyn IqHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under its qualified name.
    ///
    /// Returns the handler previously registered under that name, if any.
    pub fn register(&mut self, handler: Arc<dyn IqHandler>) -> Option<Arc<dyn IqHandler>> {
        let name = handler.qualified_name().clone();
        info!(handler = handler.name(), payload = %name, "registering handler");
        self.handlers.insert(name, handler)
    }

    /// Returns the handler registered under `name`.
    #[must_use]
    pub fn handler_for(&self, name: &QualifiedName) -> Option<&Arc<dyn IqHandler>> {
        self.handlers.get(name)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Routes `request` to the handler for its payload.
    ///
    /// # Errors
    ///
    /// Returns [`StanzaError::ServiceUnavailable`] if no handler answers the
    /// payload, otherwise whatever condition the handler reports.
    pub async fn dispatch(&self, request: IqRequest) -> Result<IqResult, StanzaError> {
        let name = request.payload.qualified_name();
        let Some(handler) = self.handlers.get(name) else {
            debug!(payload = %name, "no handler registered");
            return Err(StanzaError::ServiceUnavailable);
        };
        let target = Arc::clone(handler);
        target.handle(request).await
    }
}
