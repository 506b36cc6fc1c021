//! Domain types for the archive subsystem.
//!
//! This module contains pure domain types and the two pure algorithms of
//! conversation retrieval: page windowing ([`resolve`]) and relative time
//! encoding ([`encode`]). Nothing here performs I/O.

mod conversation;
mod datetime;
mod delta;
mod ids;
mod message;
mod pagination;
mod retrieval;
mod window;

pub use conversation::{Conversation, ConversationBuilder};
pub use datetime::{DateTimeParseError, format_xmpp_datetime, parse_xmpp_datetime};
pub use delta::{EncodedEntries, EncodedEntry, encode};
pub use ids::{BareJid, ConversationId, Jid, JidError};
pub use message::{ArchivedMessage, Direction, ParseDirectionError};
pub use pagination::{
    BeforeCursor, PaginationRequest, PaginationResult, ParseCursorError, parse_after_cursor,
};
pub use retrieval::{RetrievalQuery, RetrievalReply};
pub use window::{ResolvedWindow, resolve};
