//! Record storage trait and backends.
//!
//! This module defines the [`ContactStore`] trait, the fundamental record
//! operations behind the retrieval engine. All operations require an
//! [`OwnerScope`] - there is no escape hatch from ownership restriction.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::owner::OwnerScope;
use crate::search::ContactPredicate;
use crate::types::{Contact, ContactDraft, ContactId, ContactPatch, SortField, SortOrder};

/// Record store for contacts.
///
/// Every operation takes an [`OwnerScope`] as its first parameter and acts
/// only on that principal's records: reads select nothing else, creates
/// force ownership to the principal, and a record under another owner is
/// reported as absent rather than forbidden.
///
/// Each call applies its predicate against a consistent snapshot: a single
/// `find` never returns a record twice or skips a record that existed
/// throughout the call. Implementations may suspend while awaiting
/// storage, but never while holding a lock shared across requests.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Counts the principal's records matching the predicate.
    async fn count(&self, scope: &OwnerScope, predicate: &ContactPredicate) -> StoreResult<u64>;

    /// Returns one ordered page of the principal's records matching the
    /// predicate.
    ///
    /// The result is a finite slice, not a restartable cursor: fetching the
    /// next page is a fresh call. Ties within the sort field break by
    /// record id ascending.
    async fn find(
        &self,
        scope: &OwnerScope,
        predicate: &ContactPredicate,
        sort_by: SortField,
        order: SortOrder,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Contact>>;

    /// Reads one record by id.
    ///
    /// Returns `None` when the id does not resolve under this scope,
    /// whether or not it exists under another owner.
    async fn get(&self, scope: &OwnerScope, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Inserts a new record for the principal.
    ///
    /// The record's owner is the scope's principal, its id and timestamps
    /// are assigned here.
    ///
    /// # Errors
    ///
    /// * `StoreError::Validation` - if the draft is invalid
    async fn insert(&self, scope: &OwnerScope, draft: ContactDraft) -> StoreResult<Contact>;

    /// Applies a partial update to one record by id.
    ///
    /// All of the patch's field changes apply together or not at all.
    /// Returns the updated record, or `None` when the id does not resolve
    /// under this scope.
    ///
    /// # Errors
    ///
    /// * `StoreError::Validation` - if the patch is invalid; nothing is
    ///   changed
    async fn update_one(
        &self,
        scope: &OwnerScope,
        id: ContactId,
        patch: ContactPatch,
    ) -> StoreResult<Option<Contact>>;

    /// Deletes one record by id. Immediate and final - no soft delete.
    ///
    /// Returns the deleted record, or `None` when the id does not resolve
    /// under this scope.
    async fn delete_one(&self, scope: &OwnerScope, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Ranks the principal's records against a free-text query using the
    /// weighted composite text index.
    ///
    /// Results are ordered by descending relevance score, ties broken by
    /// record id ascending, at most `limit` entries.
    async fn rank_text(
        &self,
        scope: &OwnerScope,
        query: &str,
        limit: usize,
    ) -> StoreResult<Vec<(Contact, f64)>>;
}
