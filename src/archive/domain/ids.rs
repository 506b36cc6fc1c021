//! Identity newtypes for archive owners, correspondents, and conversations.
//!
//! Addresses follow the `[node@]domain[/resource]` shape. A [`BareJid`]
//! never carries a resource, which keeps archive lookups independent of the
//! client session a request arrived on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when an address cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JidError {
    /// The input was empty.
    #[error("address is empty")]
    Empty,

    /// The domain part was missing.
    #[error("address '{0}' has an empty domain")]
    EmptyDomain(String),

    /// An `@` was present with nothing before it.
    #[error("address '{0}' has an empty node")]
    EmptyNode(String),

    /// A `/` was present with nothing after it.
    #[error("address '{0}' has an empty resource")]
    EmptyResource(String),
}

/// A full address, optionally carrying a resource.
///
/// # Examples
///
/// ```
/// use scrollkeeper::archive::domain::Jid;
///
/// let jid = Jid::parse("juliet@capulet.lit/balcony").expect("valid address");
/// assert_eq!(jid.resource(), Some("balcony"));
/// assert_eq!(jid.to_bare().to_string(), "juliet@capulet.lit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Jid {
    node: Option<String>,
    domain: String,
    resource: Option<String>,
}

impl Jid {
    /// Parses an address of the form `[node@]domain[/resource]`.
    ///
    /// # Errors
    ///
    /// Returns [`JidError`] when the input is empty or any present part is
    /// empty.
    pub fn parse(input: &str) -> Result<Self, JidError> {
        if input.is_empty() {
            return Err(JidError::Empty);
        }

        let (bare, resource) = match input.split_once('/') {
            Some((_, "")) => return Err(JidError::EmptyResource(input.to_owned())),
            Some((bare, resource)) => (bare, Some(resource.to_owned())),
            None => (input, None),
        };

        let (node, domain) = match bare.split_once('@') {
            Some(("", _)) => return Err(JidError::EmptyNode(input.to_owned())),
            Some((node, domain)) => (Some(node.to_owned()), domain),
            None => (None, bare),
        };

        if domain.is_empty() {
            return Err(JidError::EmptyDomain(input.to_owned()));
        }

        Ok(Self {
            node,
            domain: domain.to_owned(),
            resource,
        })
    }

    /// Returns the node (local part), if any.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Returns the domain part.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the resource, if any.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns the bare form of this address.
    #[must_use]
    pub fn to_bare(&self) -> BareJid {
        BareJid {
            node: self.node.clone(),
            domain: self.domain.clone(),
        }
    }
}

impl FromStr for Jid {
    type Err = JidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Jid {
    type Error = JidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Jid> for String {
    fn from(jid: Jid) -> Self {
        jid.to_string()
    }
}

impl From<BareJid> for Jid {
    fn from(bare: BareJid) -> Self {
        Self {
            node: bare.node,
            domain: bare.domain,
            resource: None,
        }
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(node) = &self.node {
            write!(f, "{node}@")?;
        }
        f.write_str(&self.domain)?;
        if let Some(resource) = &self.resource {
            write!(f, "/{resource}")?;
        }
        Ok(())
    }
}

/// An address without a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BareJid {
    node: Option<String>,
    domain: String,
}

impl BareJid {
    /// Parses an address and strips any resource.
    ///
    /// # Errors
    ///
    /// Returns [`JidError`] when the input is not a valid address.
    pub fn parse(input: &str) -> Result<Self, JidError> {
        Jid::parse(input).map(|jid| jid.to_bare())
    }

    /// Returns the node (local part), if any.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Returns the domain part.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl FromStr for BareJid {
    type Err = JidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BareJid {
    type Error = JidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BareJid> for String {
    fn from(jid: BareJid) -> Self {
        jid.to_string()
    }
}

impl fmt::Display for BareJid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(node) = &self.node {
            write!(f, "{node}@")?;
        }
        f.write_str(&self.domain)
    }
}

/// Unique identifier for an archived conversation.
///
/// # Examples
///
/// ```
/// use scrollkeeper::archive::domain::ConversationId;
///
/// let id = ConversationId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(Uuid);

impl ConversationId {
    /// Creates a new random conversation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a conversation identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for ConversationId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
