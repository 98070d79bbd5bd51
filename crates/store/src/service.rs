//! Contact service, the entry point for each logical operation.
//!
//! The service validates inputs, compiles predicates, delegates to the
//! record store, and shapes the response envelope. It holds no state of
//! its own; side effects are confined to the store.

use tracing::{debug, instrument};

use crate::error::{NotFoundError, StoreResult, ValidationError};
use crate::owner::OwnerScope;
use crate::search::ContactPredicate;
use crate::store::ContactStore;
use crate::types::{
    Contact, ContactDraft, ContactId, ContactPage, ContactPatch, ContactQuery, PageRequest,
};

/// Orchestrates contact operations over a [`ContactStore`].
///
/// One service instance serves unbounded concurrent callers; every
/// operation is independently scoped by the caller's [`OwnerScope`].
///
/// # Examples
///
/// ```
/// use rolodex_store::owner::{OwnerId, OwnerScope};
/// use rolodex_store::service::ContactService;
/// use rolodex_store::store::MemoryStore;
/// use rolodex_store::types::{ContactDraft, ContactQuery};
///
/// # tokio_test::block_on(async {
/// let service = ContactService::new(MemoryStore::new());
/// let scope = OwnerScope::new(OwnerId::new("user-1"));
///
/// service
///     .create_contact(&scope, ContactDraft::new("Alice").with_company("Acme"))
///     .await?;
///
/// let page = service
///     .list_contacts(&scope, &ContactQuery::new().with_company("acme"))
///     .await?;
/// assert_eq!(page.total, 1);
/// # Ok::<(), rolodex_store::StoreError>(())
/// # }).unwrap();
/// ```
#[derive(Debug)]
pub struct ContactService<S> {
    store: S,
}

impl<S: ContactStore> ContactService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists the caller's contacts: filtered, sorted, and paginated.
    ///
    /// Validates the query before any store access, then counts and
    /// fetches under the compiled predicate and assembles the
    /// `{total, page, pages, contacts}` envelope. A page number past the
    /// last page yields an empty page with correct metadata.
    #[instrument(skip(self, query), fields(owner = %scope.owner_id()))]
    pub async fn list_contacts(
        &self,
        scope: &OwnerScope,
        query: &ContactQuery,
    ) -> StoreResult<ContactPage> {
        query.validate()?;
        let request = PageRequest::new(query.page, query.limit)?;
        let predicate = ContactPredicate::compile(query);

        let total = self.store.count(scope, &predicate).await?;
        let contacts = self
            .store
            .find(
                scope,
                &predicate,
                query.sort_by,
                query.order,
                request.skip(),
                u64::from(request.limit()),
            )
            .await?;

        debug!(total, page = request.page(), returned = contacts.len(), "listed contacts");
        Ok(ContactPage::assemble(request, total, contacts))
    }

    /// Fetches one contact by id.
    #[instrument(skip(self), fields(owner = %scope.owner_id(), %id))]
    pub async fn get_contact(&self, scope: &OwnerScope, id: ContactId) -> StoreResult<Contact> {
        self.store
            .get(scope, id)
            .await?
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Creates a contact owned by the caller.
    ///
    /// Ownership always comes from the scope; the draft cannot carry one.
    #[instrument(skip(self, draft), fields(owner = %scope.owner_id()))]
    pub async fn create_contact(
        &self,
        scope: &OwnerScope,
        draft: ContactDraft,
    ) -> StoreResult<Contact> {
        draft.validate()?;
        let created = self.store.insert(scope, draft).await?;
        debug!(id = %created.id(), "created contact");
        Ok(created)
    }

    /// Applies a partial update to one contact by id.
    ///
    /// The patch is validated before storage and applies atomically. A
    /// record under another owner reports not-found, indistinguishable
    /// from a missing record.
    #[instrument(skip(self, patch), fields(owner = %scope.owner_id(), %id))]
    pub async fn update_contact(
        &self,
        scope: &OwnerScope,
        id: ContactId,
        patch: ContactPatch,
    ) -> StoreResult<Contact> {
        patch.validate()?;
        self.store
            .update_one(scope, id, patch)
            .await?
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Deletes one contact by id, returning the deleted record.
    #[instrument(skip(self), fields(owner = %scope.owner_id(), %id))]
    pub async fn delete_contact(&self, scope: &OwnerScope, id: ContactId) -> StoreResult<Contact> {
        let deleted = self
            .store
            .delete_one(scope, id)
            .await?
            .ok_or(NotFoundError { id })?;
        debug!(id = %deleted.id(), "deleted contact");
        Ok(deleted)
    }

    /// Ranks the caller's contacts against a free-text query.
    ///
    /// Uses the weighted composite text index; results come back in
    /// descending relevance order. This is separate from per-field
    /// filtering, which stays literal substring matching.
    #[instrument(skip(self, query), fields(owner = %scope.owner_id()))]
    pub async fn search_contacts(
        &self,
        scope: &OwnerScope,
        query: &str,
        limit: u32,
    ) -> StoreResult<Vec<Contact>> {
        if query.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "query" }.into());
        }
        if limit == 0 {
            return Err(ValidationError::NonPositive { field: "limit" }.into());
        }

        let ranked = self.store.rank_text(scope, query, limit as usize).await?;
        Ok(ranked.into_iter().map(|(contact, _)| contact).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::owner::OwnerId;
    use crate::store::MemoryStore;

    fn service() -> ContactService<MemoryStore> {
        ContactService::new(MemoryStore::new())
    }

    fn scope(owner: &str) -> OwnerScope {
        OwnerScope::new(OwnerId::new(owner))
    }

    #[tokio::test]
    async fn test_get_translates_missing_into_not_found() {
        let service = service();
        let err = service
            .get_contact(&scope("u1"), ContactId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_validates_before_storage() {
        let service = service();
        let err = service
            .create_contact(&scope("u1"), ContactDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MissingRequiredField { field: "name" })
        ));

        let page = service
            .list_contacts(&scope("u1"), &ContactQuery::new())
            .await
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_paging() {
        let service = service();
        let err = service
            .list_contacts(&scope("u1"), &ContactQuery::new().with_limit(0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_search_rejects_blank_query() {
        let service = service();
        let err = service
            .search_contacts(&scope("u1"), "   ", 10)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_record() {
        let service = service();
        let s = scope("u1");
        let created = service
            .create_contact(&s, ContactDraft::new("Alice"))
            .await
            .unwrap();

        let deleted = service.delete_contact(&s, created.id()).await.unwrap();
        assert_eq!(deleted.id(), created.id());

        let err = service.delete_contact(&s, created.id()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
