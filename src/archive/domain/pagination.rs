//! Result set management request and result fields.
//!
//! Only the data carried by the pagination envelope lives here; encoding the
//! envelope to and from protocol elements belongs to the request parser and
//! reply serialiser.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Decimal form of the legacy "no upper bound" sentinel some clients send as
/// a `before` cursor.
const LEGACY_END_SENTINEL: &str = "9223372036854775807";

/// Error returned when a cursor string is not a valid index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid result set cursor: '{0}'")]
pub struct ParseCursorError(String);

/// Upper bound of a page requested with a `before` cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum BeforeCursor {
    /// The page ends just before this index.
    Index(u64),

    /// The page ends at the end of the conversation.
    End,
}

impl FromStr for BeforeCursor {
    type Err = ParseCursorError;

    /// Parses a `before` cursor.
    ///
    /// An empty cursor asks for the last page, as does the legacy
    /// `i64::MAX` sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | LEGACY_END_SENTINEL => Ok(Self::End),
            value => value
                .parse()
                .map(Self::Index)
                .map_err(|_| ParseCursorError(s.to_owned())),
        }
    }
}

/// Parses an `after` cursor into the index it names.
///
/// # Errors
///
/// Returns [`ParseCursorError`] if the cursor is not a non-negative decimal
/// integer.
pub fn parse_after_cursor(cursor: &str) -> Result<u64, ParseCursorError> {
    cursor
        .trim()
        .parse()
        .map_err(|_| ParseCursorError(cursor.to_owned()))
}

/// Pagination fields supplied with a retrieval request.
///
/// Well-formed requests populate one cursor at most. When several are
/// present the resolver applies `index`, then `after`, then `before`.
///
/// # Examples
///
/// ```
/// use scrollkeeper::archive::domain::{BeforeCursor, PaginationRequest};
///
/// let request = PaginationRequest::new().with_max(10).with_before(BeforeCursor::End);
/// assert_eq!(request.max(), Some(10));
/// assert!(request.index().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    after: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    before: Option<BeforeCursor>,
}

impl PaginationRequest {
    /// Creates a request with no fields set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max: None,
            index: None,
            after: None,
            before: None,
        }
    }

    /// Sets the maximum page size.
    #[must_use]
    pub const fn with_max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the absolute start index.
    #[must_use]
    pub const fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the `after` cursor.
    #[must_use]
    pub const fn with_after(mut self, after: u64) -> Self {
        self.after = Some(after);
        self
    }

    /// Sets the `before` cursor.
    #[must_use]
    pub const fn with_before(mut self, before: BeforeCursor) -> Self {
        self.before = Some(before);
        self
    }

    /// Returns the maximum page size, if requested.
    #[must_use]
    pub const fn max(&self) -> Option<u64> {
        self.max
    }

    /// Returns the absolute start index, if requested.
    #[must_use]
    pub const fn index(&self) -> Option<u64> {
        self.index
    }

    /// Returns the `after` cursor, if requested.
    #[must_use]
    pub const fn after(&self) -> Option<u64> {
        self.after
    }

    /// Returns the `before` cursor, if requested.
    #[must_use]
    pub const fn before(&self) -> Option<BeforeCursor> {
        self.before
    }
}

/// Pagination metadata reported with a reply.
///
/// `first` and `last` are absent when the returned page is empty; `count`
/// is always the size of the whole conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last: Option<usize>,
    count: usize,
}

impl PaginationResult {
    /// Creates a result describing a non-empty page.
    #[must_use]
    pub const fn page(first: usize, last: usize, count: usize) -> Self {
        Self {
            first: Some(first),
            last: Some(last),
            count,
        }
    }

    /// Creates a result describing an empty page.
    #[must_use]
    pub const fn empty(count: usize) -> Self {
        Self {
            first: None,
            last: None,
            count,
        }
    }

    /// Returns the index of the first returned entry.
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        self.first
    }

    /// Returns the index of the last returned entry.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        self.last
    }

    /// Returns the total number of messages in the conversation.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the `first` cursor as reported on the wire.
    #[must_use]
    pub fn first_cursor(&self) -> Option<String> {
        self.first.map(|index| index.to_string())
    }

    /// Returns the `last` cursor as reported on the wire.
    #[must_use]
    pub fn last_cursor(&self) -> Option<String> {
        self.last.map(|index| index.to_string())
    }
}
