//! Port trait definitions for the archive subsystem.
//!
//! Ports define the abstract interfaces that the domain requires from
//! infrastructure. Adapters implement these ports to connect retrieval to
//! message stores and protocol routers.

pub mod handler;
pub mod repository;

pub use handler::{IqHandler, IqQuery, IqRequest, IqResult, QualifiedName};
pub use repository::{ConversationRepository, RepositoryResult};
