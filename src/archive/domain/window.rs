//! Page windowing for result set management requests.
//!
//! Translates a [`PaginationRequest`] into a half-open index range over an
//! ordered conversation. Every combination of fields resolves to a valid,
//! possibly empty, range; nothing here fails.

use super::{BeforeCursor, PaginationRequest, PaginationResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A resolved page: `from_index` inclusive, `to_index` exclusive.
///
/// # Invariants
///
/// `0 <= from_index <= to_index <= total` where `total` is the message count
/// the window was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedWindow {
    from_index: usize,
    to_index: usize,
}

impl ResolvedWindow {
    /// Returns a window covering all `total` messages.
    #[must_use]
    pub const fn full(total: usize) -> Self {
        Self {
            from_index: 0,
            to_index: total,
        }
    }

    /// Clamps a candidate range into `[0, total]`, never producing a
    /// negative length.
    fn clamped(from: i64, to: i64, total: usize) -> Self {
        let upper = to_signed(total);
        let from_index = from.clamp(0, upper);
        let to_index = to.clamp(from_index, upper);
        Self {
            from_index: to_unsigned(from_index),
            to_index: to_unsigned(to_index),
        }
    }

    /// Returns the first index in the window.
    #[must_use]
    pub const fn from_index(&self) -> usize {
        self.from_index
    }

    /// Returns the index one past the last index in the window.
    #[must_use]
    pub const fn to_index(&self) -> usize {
        self.to_index
    }

    /// Returns the number of entries in the window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.to_index.saturating_sub(self.from_index)
    }

    /// Returns `true` if the window selects nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the window as a range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.from_index..self.to_index
    }

    /// Selects the window from `items`.
    ///
    /// Returns an empty slice if the window does not fit, which only happens
    /// when `items` is not the sequence the window was resolved against.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.range()).unwrap_or(&[])
    }
}

/// Resolves a pagination request against a conversation of `total` messages.
///
/// Without a request the whole conversation is selected and no metadata is
/// produced. With one, a `max` no larger than `total` bounds the page; then
/// the first present cursor of `index`, `after`, and `before` positions it.
/// The candidate range is finally clamped into `[0, total]`.
///
/// # Examples
///
/// ```
/// use scrollkeeper::archive::domain::{resolve, PaginationRequest};
///
/// let request = PaginationRequest::new().with_max(3).with_after(4);
/// let (window, result) = resolve(10, Some(&request));
/// assert_eq!(window.range(), 5..8);
/// assert_eq!(result.map(|r| r.count()), Some(10));
/// ```
#[must_use]
pub fn resolve(
    total: usize,
    request: Option<&PaginationRequest>,
) -> (ResolvedWindow, Option<PaginationResult>) {
    let Some(request) = request else {
        return (ResolvedWindow::full(total), None);
    };

    let total_signed = to_signed(total);
    let max = request
        .max()
        .map(u64_to_signed)
        .filter(|max| *max <= total_signed)
        .unwrap_or(total_signed);

    let (from, to) = if let Some(index) = request.index() {
        let from = u64_to_signed(index);
        (from, from.saturating_add(max))
    } else if let Some(after) = request.after() {
        let from = u64_to_signed(after).saturating_add(1);
        (from, from.saturating_add(max))
    } else if let Some(before) = request.before() {
        let to = match before {
            BeforeCursor::Index(index) => u64_to_signed(index),
            BeforeCursor::End => total_signed,
        };
        (to.saturating_sub(max), to)
    } else {
        (0, max)
    };

    let window = ResolvedWindow::clamped(from, to, total);
    let result = if window.is_empty() {
        PaginationResult::empty(total)
    } else {
        PaginationResult::page(
            window.from_index(),
            window.to_index().saturating_sub(1),
            total,
        )
    };
    (window, Some(result))
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn u64_to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// Callers only pass values already clamped into `[0, total]`.
fn to_unsigned(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}
