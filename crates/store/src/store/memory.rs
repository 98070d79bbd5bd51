//! In-memory contact store.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::StoreResult;
use crate::owner::{OwnerId, OwnerScope};
use crate::search::{ContactPredicate, FieldIndexes, TextIndex};
use crate::store::ContactStore;
use crate::types::{Contact, ContactDraft, ContactId, ContactPatch, SortField, SortOrder};

/// An in-memory [`ContactStore`] with full index maintenance.
///
/// Records are partitioned by owner, so cross-owner selection is
/// structurally impossible. Every operation takes the lock for its whole
/// (synchronous) body and never suspends while holding it, which gives
/// each call a consistent snapshot; writers swap fully-built records, so
/// no reader observes a half-applied mutation.
///
/// # Examples
///
/// ```
/// use rolodex_store::owner::{OwnerId, OwnerScope};
/// use rolodex_store::store::{ContactStore, MemoryStore};
/// use rolodex_store::types::ContactDraft;
///
/// # tokio_test::block_on(async {
/// let store = MemoryStore::new();
/// let scope = OwnerScope::new(OwnerId::new("user-1"));
///
/// let created = store
///     .insert(&scope, ContactDraft::new("Alice").with_company("Acme"))
///     .await?;
/// assert_eq!(store.get(&scope, created.id()).await?.unwrap().name(), "Alice");
/// # Ok::<(), rolodex_store::StoreError>(())
/// # }).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    records: HashMap<OwnerId, BTreeMap<ContactId, Contact>>,
    fields: FieldIndexes,
    text: TextIndex,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemoryInner {
    fn owner_records(&self, owner: &OwnerId) -> Option<&BTreeMap<ContactId, Contact>> {
        self.records.get(owner)
    }

    /// Resolves the matching contacts for one owner, unsorted.
    fn matching(&self, owner: &OwnerId, predicate: &ContactPredicate) -> Vec<Contact> {
        let Some(records) = self.owner_records(owner) else {
            return Vec::new();
        };
        match self.fields.matching_ids(owner, predicate) {
            Some(ids) => ids
                .iter()
                .filter_map(|id| records.get(id))
                .cloned()
                .collect(),
            None => records.values().cloned().collect(),
        }
    }

    fn matching_count(&self, owner: &OwnerId, predicate: &ContactPredicate) -> u64 {
        let Some(records) = self.owner_records(owner) else {
            return 0;
        };
        match self.fields.matching_ids(owner, predicate) {
            Some(ids) => ids.len() as u64,
            None => records.len() as u64,
        }
    }
}

/// Compares two contacts for result ordering.
///
/// Absent sort values order before present ones ascending; present values
/// compare case-insensitively with the raw value as the first tie-break.
/// The final tie-break is record id ascending regardless of direction, so
/// repeated identical queries over unchanged data return identical order.
fn compare(sort_by: SortField, order: SortOrder, a: &Contact, b: &Contact) -> Ordering {
    let by_field = match (sort_by.value_of(a), sort_by.value_of(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
    };
    let directed = match order {
        SortOrder::Asc => by_field,
        SortOrder::Desc => by_field.reverse(),
    };
    directed.then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl ContactStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn count(&self, scope: &OwnerScope, predicate: &ContactPredicate) -> StoreResult<u64> {
        let inner = self.inner.read();
        Ok(inner.matching_count(scope.owner_id(), predicate))
    }

    async fn find(
        &self,
        scope: &OwnerScope,
        predicate: &ContactPredicate,
        sort_by: SortField,
        order: SortOrder,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Contact>> {
        let inner = self.inner.read();
        let mut matched = inner.matching(scope.owner_id(), predicate);
        drop(inner);

        matched.sort_by(|a, b| compare(sort_by, order, a, b));
        Ok(matched
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn get(&self, scope: &OwnerScope, id: ContactId) -> StoreResult<Option<Contact>> {
        let inner = self.inner.read();
        Ok(inner
            .owner_records(scope.owner_id())
            .and_then(|records| records.get(&id))
            .cloned())
    }

    async fn insert(&self, scope: &OwnerScope, draft: ContactDraft) -> StoreResult<Contact> {
        draft.validate()?;
        let contact = Contact::create(scope.owner_id().clone(), draft);

        let mut inner = self.inner.write();
        inner.fields.insert(&contact);
        inner.text.insert(&contact);
        inner
            .records
            .entry(scope.owner_id().clone())
            .or_default()
            .insert(contact.id(), contact.clone());
        Ok(contact)
    }

    async fn update_one(
        &self,
        scope: &OwnerScope,
        id: ContactId,
        patch: ContactPatch,
    ) -> StoreResult<Option<Contact>> {
        patch.validate()?;

        let mut inner = self.inner.write();
        let Some(old) = inner
            .owner_records(scope.owner_id())
            .and_then(|records| records.get(&id))
            .cloned()
        else {
            return Ok(None);
        };

        let updated = old.clone().patched(patch);
        inner.fields.update(&old, &updated);
        inner.text.update(&old, &updated);
        if let Some(records) = inner.records.get_mut(scope.owner_id()) {
            records.insert(id, updated.clone());
        }
        Ok(Some(updated))
    }

    async fn delete_one(&self, scope: &OwnerScope, id: ContactId) -> StoreResult<Option<Contact>> {
        let mut inner = self.inner.write();
        let Some(deleted) = inner
            .records
            .get_mut(scope.owner_id())
            .and_then(|records| records.remove(&id))
        else {
            return Ok(None);
        };

        inner.fields.remove(&deleted);
        inner.text.remove(&deleted);
        if inner
            .records
            .get(scope.owner_id())
            .is_some_and(BTreeMap::is_empty)
        {
            inner.records.remove(scope.owner_id());
        }
        Ok(Some(deleted))
    }

    async fn rank_text(
        &self,
        scope: &OwnerScope,
        query: &str,
        limit: usize,
    ) -> StoreResult<Vec<(Contact, f64)>> {
        let inner = self.inner.read();
        let ranked = inner.text.rank(scope.owner_id(), query, limit);
        let Some(records) = inner.owner_records(scope.owner_id()) else {
            return Ok(Vec::new());
        };
        Ok(ranked
            .into_iter()
            .filter_map(|(id, score)| records.get(&id).map(|contact| (contact.clone(), score)))
            .collect())
    }
}
