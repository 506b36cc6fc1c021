//! Relative time encoding of a selected page of messages.

use super::{ArchivedMessage, BareJid, Direction, Jid};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// One rendered entry of a retrieval reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedEntry {
    /// Direction tag taken from the archived message.
    pub direction: Direction,

    /// Whole seconds since the previous entry, or since the conversation
    /// start for the first entry of the page. May be negative when archived
    /// clocks disagree.
    pub elapsed_seconds: i64,

    /// Correspondent recorded on the message when it differs from the
    /// conversation default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correspondent: Option<BareJid>,

    /// Message text; empty bodies are kept.
    pub body: String,
}

/// Lazily encodes a page of messages.
///
/// Cloning the iterator restarts encoding from the current position, so a
/// fresh [`encode`] call or a clone taken before iteration replays the page.
#[derive(Debug, Clone)]
pub struct EncodedEntries<'a> {
    reference: DateTime<Utc>,
    default_correspondent: &'a BareJid,
    remaining: std::slice::Iter<'a, ArchivedMessage>,
}

impl Iterator for EncodedEntries<'_> {
    type Item = EncodedEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let message = self.remaining.next()?;
        let elapsed_seconds = (message.time() - self.reference).num_seconds();
        self.reference = message.time();

        let correspondent = message
            .correspondent()
            .map(Jid::to_bare)
            .filter(|bare| bare != self.default_correspondent);

        Some(EncodedEntry {
            direction: message.direction(),
            elapsed_seconds,
            correspondent,
            body: message.body().to_owned(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl ExactSizeIterator for EncodedEntries<'_> {}

impl FusedIterator for EncodedEntries<'_> {}

/// Encodes `messages` relative to `conversation_start`.
///
/// The first message is measured from the conversation start, never from a
/// message outside the page; each later one from its predecessor. Elapsed
/// time truncates toward zero.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use scrollkeeper::archive::domain::{encode, ArchivedMessage, BareJid, Direction};
///
/// let start = Utc.with_ymd_and_hms(2008, 4, 7, 13, 16, 0).single().expect("valid time");
/// let with = BareJid::parse("romeo@montague.net").expect("valid address");
/// let messages = [
///     ArchivedMessage::new(start + TimeDelta::seconds(5), Direction::To, "one"),
///     ArchivedMessage::new(start + TimeDelta::seconds(17), Direction::From, "two"),
/// ];
///
/// let elapsed: Vec<i64> = encode(start, &with, &messages)
///     .map(|entry| entry.elapsed_seconds)
///     .collect();
/// assert_eq!(elapsed, vec![5, 12]);
/// ```
#[must_use]
pub fn encode<'a>(
    conversation_start: DateTime<Utc>,
    default_correspondent: &'a BareJid,
    messages: &'a [ArchivedMessage],
) -> EncodedEntries<'a> {
    EncodedEntries {
        reference: conversation_start,
        default_correspondent,
        remaining: messages.iter(),
    }
}
