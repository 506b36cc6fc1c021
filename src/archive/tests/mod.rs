//! Unit tests for the archive module.
//!
//! Tests are organised by concern, covering the windowing and encoding
//! algorithms, domain value types, and the retrieval service.
