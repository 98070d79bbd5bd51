//! Owner identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque identifier for the principal that owns a set of contacts.
///
/// The store treats the value as a trusted, already-authenticated identity
/// supplied by the calling collaborator; it carries no structure and is
/// never parsed.
///
/// # Examples
///
/// ```
/// use rolodex_store::owner::OwnerId;
///
/// let owner = OwnerId::new("user-42");
/// assert_eq!(owner.as_str(), "user-42");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates a new owner id from the given string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the owner id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnerId({})", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OwnerId::new(s))
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        OwnerId::new(s)
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        OwnerId::new(s)
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
