//! Scrollkeeper: paginated retrieval from a message archive.
//!
//! This crate answers requests for a previously archived conversation and
//! returns one page of it, encoded with relative times between entries.
//!
//! # Architecture
//!
//! Scrollkeeper follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`archive`]: Conversation lookup, page windowing, and reply encoding

pub mod archive;
