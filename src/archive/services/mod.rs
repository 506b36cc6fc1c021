//! Application services for the archive subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports:
//! fetching a conversation, windowing it, and routing requests to handlers.

mod config;
mod registry;
mod retrieve;

pub use config::{ARCHIVE_NAMESPACE, LEGACY_ARCHIVE_NAMESPACE, RetrievalConfig};
pub use registry::HandlerRegistry;
pub use retrieve::{RetrievalResult, RetrieveHandler, RetrieveService};
