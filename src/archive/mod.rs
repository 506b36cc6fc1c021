//! Conversation retrieval from a message archive.
//!
//! This module answers requests for a previously archived conversation and
//! returns one page of it, with each entry's time encoded relative to the
//! entry before it.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and algorithms ([`domain::resolve`], [`domain::encode`], [`domain::Conversation`])
//! - **Ports**: Abstract trait interfaces ([`ports::ConversationRepository`], [`ports::IqHandler`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryConversationRepository`])
//! - **Services**: Retrieval orchestration and request routing ([`services::RetrieveService`], [`services::HandlerRegistry`])
//!
//! # Example
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use scrollkeeper::archive::domain::{
//!     ArchivedMessage, BareJid, Conversation, Direction, Jid, PaginationRequest, RetrievalQuery,
//! };
//! use scrollkeeper::archive::adapters::memory::InMemoryConversationRepository;
//! use scrollkeeper::archive::services::RetrieveService;
//! use std::sync::Arc;
//!
//! let start = Utc.with_ymd_and_hms(2008, 4, 7, 13, 16, 0).single().expect("valid time");
//! let juliet = Jid::parse("juliet@capulet.lit/chamber").expect("valid address");
//! let romeo = Jid::parse("romeo@montague.net").expect("valid address");
//!
//! let repository = InMemoryConversationRepository::new();
//! repository
//!     .insert(
//!         Conversation::builder(juliet.to_bare(), romeo.clone(), start)
//!             .with_message(ArchivedMessage::new(start + TimeDelta::seconds(1), Direction::To, "Hi"))
//!             .build(),
//!     )
//!     .expect("insert succeeds");
//!
//! let service = RetrieveService::new(Arc::new(repository));
//! let query = RetrievalQuery::new(romeo, start).with_pagination(PaginationRequest::new().with_max(5));
//! let runtime = tokio::runtime::Runtime::new().expect("runtime");
//! let reply = runtime.block_on(service.retrieve(&juliet, &query)).expect("conversation exists");
//!
//! assert_eq!(reply.entries.len(), 1);
//! assert_eq!(reply.pagination.map(|p| p.count()), Some(1));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
