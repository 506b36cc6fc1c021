//! Persistence adapters for the archive module.
//!
//! Concrete implementations of the
//! [`ConversationRepository`](crate::archive::ports::ConversationRepository)
//! port.
//!
//! - [`memory::InMemoryConversationRepository`]: thread-safe in-memory
//!   archive for tests and embedding

pub mod memory;
