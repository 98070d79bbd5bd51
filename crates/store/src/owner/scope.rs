//! Owner scope for store operations.
//!
//! This module defines [`OwnerScope`], the validated principal context
//! required for ALL store operations. The design ensures ownership
//! restriction at the type level: operations cannot be issued without
//! naming the principal they act for.

use super::id::OwnerId;
use crate::types::Contact;

/// The principal context required for every store operation.
///
/// `OwnerScope` restricts each operation to records whose `owner_id` equals
/// the scope's principal. There is no "escape hatch": creation forces the
/// new record's owner to the principal, and a record owned by anyone else
/// is indistinguishable from a record that does not exist.
///
/// # Examples
///
/// ```
/// use rolodex_store::owner::{OwnerId, OwnerScope};
///
/// let scope = OwnerScope::new(OwnerId::new("user-42"))
///     .with_correlation_id("req-123");
/// assert_eq!(scope.owner_id().as_str(), "user-42");
/// assert_eq!(scope.correlation_id(), Some("req-123"));
/// ```
#[derive(Debug, Clone)]
pub struct OwnerScope {
    /// The principal on whose behalf the operation runs.
    owner_id: OwnerId,
    /// Optional correlation id for request tracing.
    correlation_id: Option<String>,
}

impl OwnerScope {
    /// Creates a scope for the given principal.
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            correlation_id: None,
        }
    }

    /// Attaches a correlation id for request tracing.
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Returns the principal this scope is pinned to.
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Returns the correlation id, if set.
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Returns `true` if the given contact belongs to this scope's principal.
    pub fn owns(&self, contact: &Contact) -> bool {
        contact.owner_id() == &self.owner_id
    }
}

impl From<OwnerId> for OwnerScope {
    fn from(owner_id: OwnerId) -> Self {
        OwnerScope::new(owner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactDraft;

    #[test]
    fn test_scope_creation() {
        let scope = OwnerScope::new(OwnerId::new("user-1"));
        assert_eq!(scope.owner_id().as_str(), "user-1");
        assert_eq!(scope.correlation_id(), None);
    }

    #[test]
    fn test_with_correlation_id() {
        let scope = OwnerScope::new(OwnerId::new("user-1")).with_correlation_id("req-9");
        assert_eq!(scope.correlation_id(), Some("req-9"));
    }

    #[test]
    fn test_owns() {
        let scope = OwnerScope::new(OwnerId::new("user-1"));
        let other = OwnerScope::new(OwnerId::new("user-2"));

        let contact = Contact::create(OwnerId::new("user-1"), ContactDraft::new("Alice"));

        assert!(scope.owns(&contact));
        assert!(!other.owns(&contact));
    }
}
