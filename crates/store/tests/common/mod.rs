//! Shared helpers for contact store integration tests.

#![allow(dead_code)]

use rolodex_store::owner::{OwnerId, OwnerScope};
use rolodex_store::service::ContactService;
use rolodex_store::store::MemoryStore;
use rolodex_store::types::{Contact, ContactDraft};

/// Creates a service over a fresh in-memory store.
pub fn service() -> ContactService<MemoryStore> {
    ContactService::new(MemoryStore::new())
}

/// Creates a scope for the given owner.
pub fn scope(owner: &str) -> OwnerScope {
    OwnerScope::new(OwnerId::new(owner))
}

/// Creates a draft with just a name.
pub fn draft(name: &str) -> ContactDraft {
    ContactDraft::new(name)
}

/// Creates a draft with a name and a company.
pub fn employee(name: &str, company: &str) -> ContactDraft {
    ContactDraft::new(name).with_company(company)
}

/// Seeds the given drafts under one scope, returning the created records.
pub async fn seed(
    service: &ContactService<MemoryStore>,
    scope: &OwnerScope,
    drafts: Vec<ContactDraft>,
) -> Vec<Contact> {
    let mut created = Vec::with_capacity(drafts.len());
    for draft in drafts {
        created.push(service.create_contact(scope, draft).await.unwrap());
    }
    created
}
