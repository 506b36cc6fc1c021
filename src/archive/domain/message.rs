//! Archived messages and their direction relative to the archive owner.

use super::Jid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Polarity of an archived message relative to the archive owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sent by the archive owner to the correspondent.
    To,

    /// Received by the archive owner from the correspondent.
    From,
}

impl Direction {
    /// Returns the direction tag used for the entry element.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::To => "to",
            Self::From => "from",
        }
    }

    /// Returns `true` if the archive owner sent the message.
    #[must_use]
    pub const fn is_outgoing(&self) -> bool {
        matches!(self, Self::To)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid direction tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid message direction: '{}'", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl TryFrom<&str> for Direction {
    type Error = ParseDirectionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "to" => Ok(Self::To),
            "from" => Ok(Self::From),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}

/// A single message held in a conversation archive.
///
/// Immutable once constructed. The optional correspondent records a
/// per-message address when it differs from the conversation default, for
/// example a specific occupant or resource.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scrollkeeper::archive::domain::{ArchivedMessage, Direction};
///
/// let sent = Utc.with_ymd_and_hms(2008, 4, 7, 13, 16, 0).single().expect("valid time");
/// let message = ArchivedMessage::new(sent, Direction::To, "Art thou not Romeo?");
/// assert_eq!(message.body(), "Art thou not Romeo?");
/// assert!(message.correspondent().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedMessage {
    time: DateTime<Utc>,
    direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correspondent: Option<Jid>,
    body: String,
}

impl ArchivedMessage {
    /// Creates a message without a correspondent override.
    #[must_use]
    pub fn new(time: DateTime<Utc>, direction: Direction, body: impl Into<String>) -> Self {
        Self {
            time,
            direction,
            correspondent: None,
            body: body.into(),
        }
    }

    /// Attaches a per-message correspondent address.
    #[must_use]
    pub fn with_correspondent(mut self, correspondent: Jid) -> Self {
        self.correspondent = Some(correspondent);
        self
    }

    /// Returns when the message was archived.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Returns the message direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the per-message correspondent, if recorded.
    #[must_use]
    pub const fn correspondent(&self) -> Option<&Jid> {
        self.correspondent.as_ref()
    }

    /// Returns the message text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
