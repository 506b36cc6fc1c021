//! Shared fixtures for retrieval integration tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rstest::fixture;
use scrollkeeper::archive::{
    adapters::memory::InMemoryConversationRepository,
    domain::{ArchivedMessage, Conversation, Direction, Jid},
    services::{HandlerRegistry, RetrievalConfig, RetrieveHandler, RetrieveService},
};
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory archive for each test.
#[fixture]
pub fn repo() -> InMemoryConversationRepository {
    InMemoryConversationRepository::new()
}

/// Start time shared by archived conversations.
#[must_use]
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2008, 4, 7, 13, 16, 0)
        .single()
        .unwrap_or_default()
}

/// The archive owner's session address.
///
/// # Errors
///
/// Returns an error if the literal address fails to parse.
pub fn juliet() -> Result<Jid, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Jid::parse("juliet@capulet.lit/balcony")?)
}

/// The correspondent's address.
///
/// # Errors
///
/// Returns an error if the literal address fails to parse.
pub fn romeo() -> Result<Jid, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Jid::parse("romeo@montague.net")?)
}

/// Archives a conversation of `count` alternating messages, the n-th sent
/// `offsets[n]` seconds after its predecessor.
///
/// # Errors
///
/// Returns an error if an address fails to parse or the insert fails.
pub fn archive_conversation(
    repo: &InMemoryConversationRepository,
    offsets: &[i64],
) -> Result<Conversation, Box<dyn std::error::Error + Send + Sync>> {
    let mut at = start();
    let mut builder = Conversation::builder(juliet()?.to_bare(), romeo()?, start());
    for (n, offset) in offsets.iter().enumerate() {
        at += TimeDelta::seconds(*offset);
        let direction = if n % 2 == 0 {
            Direction::To
        } else {
            Direction::From
        };
        builder = builder.with_message(ArchivedMessage::new(at, direction, format!("line {n}")));
    }
    let conversation = builder.build();
    repo.insert(conversation.clone())?;
    Ok(conversation)
}

/// Builds a registry with the default retrieve handler over `repo`.
#[must_use]
pub fn registry(repo: &InMemoryConversationRepository) -> HandlerRegistry {
    let handler = RetrieveHandler::new(
        RetrieveService::new(Arc::new(repo.clone())),
        &RetrievalConfig::default(),
    );
    let mut registry = HandlerRegistry::new();
    registry.register(Arc::new(handler));
    registry
}
