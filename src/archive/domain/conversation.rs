//! The archived conversation aggregate.

use super::{ArchivedMessage, BareJid, ConversationId, Jid};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered message history between an archive owner and one
/// correspondent, starting at a fixed instant.
///
/// # Invariants
///
/// - Message order is insertion order, which is chronological order
/// - Conversations are read-only once fetched; there are no mutators
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use scrollkeeper::archive::domain::{
///     ArchivedMessage, BareJid, Conversation, Direction, Jid,
/// };
///
/// let start = Utc.with_ymd_and_hms(2008, 4, 7, 13, 16, 0).single().expect("valid time");
/// let conversation = Conversation::builder(
///     BareJid::parse("juliet@capulet.lit").expect("valid owner"),
///     Jid::parse("romeo@montague.net").expect("valid correspondent"),
///     start,
/// )
/// .with_message(ArchivedMessage::new(start + TimeDelta::seconds(5), Direction::To, "Hi"))
/// .build();
///
/// assert_eq!(conversation.message_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier for this conversation.
    id: ConversationId,

    /// The archive owner.
    owner: BareJid,

    /// The default correspondent, always held in bare form.
    with: BareJid,

    /// When the conversation started.
    start: DateTime<Utc>,

    /// Messages in chronological order.
    messages: Vec<ArchivedMessage>,
}

impl Conversation {
    /// Returns a builder for a conversation.
    #[must_use]
    pub fn builder(owner: BareJid, with: Jid, start: DateTime<Utc>) -> ConversationBuilder {
        ConversationBuilder::new(owner, with, start)
    }

    /// Returns the conversation identifier.
    #[must_use]
    pub const fn id(&self) -> ConversationId {
        self.id
    }

    /// Returns the archive owner.
    #[must_use]
    pub const fn owner(&self) -> &BareJid {
        &self.owner
    }

    /// Returns the default correspondent in bare form.
    #[must_use]
    pub const fn with(&self) -> &BareJid {
        &self.with
    }

    /// Returns the conversation start time.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the messages in chronological order.
    #[must_use]
    pub fn messages(&self) -> &[ArchivedMessage] {
        &self.messages
    }

    /// Returns the total number of archived messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// Builder for assembling a [`Conversation`] snapshot.
#[derive(Debug)]
pub struct ConversationBuilder {
    id: Option<ConversationId>,
    owner: BareJid,
    with: BareJid,
    start: DateTime<Utc>,
    messages: Vec<ArchivedMessage>,
}

impl ConversationBuilder {
    /// Creates a new conversation builder.
    #[must_use]
    pub fn new(owner: BareJid, with: Jid, start: DateTime<Utc>) -> Self {
        Self {
            id: None,
            owner,
            with: with.to_bare(),
            start,
            messages: Vec::new(),
        }
    }

    /// Sets a specific conversation ID.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "Option::Some with Copy type should be const but isn't stable"
    )]
    pub fn with_id(mut self, id: ConversationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Appends a message.
    #[must_use]
    pub fn with_message(mut self, message: ArchivedMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Appends multiple messages in order.
    #[must_use]
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = ArchivedMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Builds the conversation.
    #[must_use]
    pub fn build(self) -> Conversation {
        Conversation {
            id: self.id.unwrap_or_default(),
            owner: self.owner,
            with: self.with,
            start: self.start,
            messages: self.messages,
        }
    }
}
