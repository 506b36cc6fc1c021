//! Retrieval handler configuration.

use crate::archive::{error::ConfigError, ports::QualifiedName};
use serde::Deserialize;

/// Current message archiving namespace.
pub const ARCHIVE_NAMESPACE: &str = "urn:xmpp:archive";

/// Namespace used by archives predating the registered URN.
pub const LEGACY_ARCHIVE_NAMESPACE: &str = "http://www.xmpp.org/extensions/xep-0136.html#ns";

/// Configuration for the retrieve handler.
///
/// # Examples
///
/// ```
/// use scrollkeeper::archive::services::RetrievalConfig;
///
/// let config = RetrievalConfig::default();
/// assert_eq!(config.namespace, "urn:xmpp:archive");
///
/// let loaded = RetrievalConfig::from_json(r#"{"element": "fetch"}"#).expect("valid config");
/// assert_eq!(loaded.element, "fetch");
/// assert_eq!(loaded.namespace, "urn:xmpp:archive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Namespace the handler answers.
    pub namespace: String,
    /// Element name the handler answers.
    pub element: String,
    /// Human-readable handler name.
    pub handler_name: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            namespace: ARCHIVE_NAMESPACE.to_owned(),
            element: "retrieve".to_owned(),
            handler_name: "Message Archiving Retrieve Handler".to_owned(),
        }
    }
}

impl RetrievalConfig {
    /// Creates a configuration answering the legacy namespace.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            namespace: LEGACY_ARCHIVE_NAMESPACE.to_owned(),
            ..Default::default()
        }
    }

    /// Loads a configuration from JSON; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document is malformed or names an
    /// empty namespace or element.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the handler can be addressed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] for an empty namespace or element.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::EmptyField("namespace"));
        }
        if self.element.trim().is_empty() {
            return Err(ConfigError::EmptyField("element"));
        }
        Ok(())
    }

    /// Returns the payload name the handler answers.
    #[must_use]
    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.namespace.clone(), self.element.clone())
    }
}
