//! Tests for create, read, update, and delete operations.

mod common;

use common::{draft, scope, seed, service};

use rolodex_store::error::{StoreError, ValidationError};
use rolodex_store::types::{ContactDraft, ContactId, ContactPatch, ContactQuery};

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_assigns_id_owner_and_timestamps() {
    let service = service();
    let scope = scope("user-1");

    let created = service
        .create_contact(
            &scope,
            ContactDraft::new("Alice Chen")
                .with_company("Acme")
                .with_role("Engineer")
                .with_email("alice@acme.io")
                .with_linkedin_profile("https://linkedin.com/in/alice")
                .with_phone_number("+1 555 0100")
                .with_how_met("RustConf hallway track")
                .with_notes("Follow up about the parser rewrite"),
        )
        .await
        .unwrap();

    assert_eq!(created.owner_id().as_str(), "user-1");
    assert_eq!(created.name(), "Alice Chen");
    assert_eq!(created.company(), Some("Acme"));
    assert_eq!(created.how_met(), Some("RustConf hallway track"));
    assert_eq!(created.created_at(), created.updated_at());
}

#[tokio::test]
async fn test_create_requires_name() {
    let service = service();
    let err = service
        .create_contact(&scope("user-1"), ContactDraft::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::MissingRequiredField { field: "name" })
    ));
}

#[tokio::test]
async fn test_create_rejects_malformed_email_and_url() {
    let service = service();
    let scope = scope("user-1");

    let err = service
        .create_contact(&scope, draft("Alice").with_email("alice-at-acme"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidField { field: "email", .. })
    ));

    let err = service
        .create_contact(&scope, draft("Alice").with_linkedin_profile("not a url"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidField {
            field: "linkedinProfile",
            ..
        })
    ));

    // Nothing was stored
    let page = service
        .list_contacts(&scope, &ContactQuery::new())
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_get_returns_created_contact() {
    let service = service();
    let scope = scope("user-1");
    let created = service
        .create_contact(&scope, draft("Alice"))
        .await
        .unwrap();

    let fetched = service.get_contact(&scope, created.id()).await.unwrap();
    assert_eq!(fetched.id(), created.id());
    assert_eq!(fetched.name(), "Alice");
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let service = service();
    let scope = scope("user-1");
    let created = service
        .create_contact(&scope, draft("Alice").with_notes("stable"))
        .await
        .unwrap();

    let first = service.get_contact(&scope, created.id()).await.unwrap();
    let second = service.get_contact(&scope, created.id()).await.unwrap();

    assert_eq!(first.id(), second.id());
    assert_eq!(first.name(), second.name());
    assert_eq!(first.notes(), second.notes());
    assert_eq!(first.updated_at(), second.updated_at());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let service = service();
    let err = service
        .get_contact(&scope("user-1"), ContactId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_replaces_only_patched_fields() {
    let service = service();
    let scope = scope("user-1");
    let created = service
        .create_contact(
            &scope,
            draft("Alice").with_company("Acme").with_role("Engineer"),
        )
        .await
        .unwrap();

    let updated = service
        .update_contact(
            &scope,
            created.id(),
            ContactPatch::new().set_company("NewCo"),
        )
        .await
        .unwrap();

    assert_eq!(updated.company(), Some("NewCo"));
    assert_eq!(updated.role(), Some("Engineer"));
    assert_eq!(updated.name(), "Alice");
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() >= created.updated_at());
}

#[tokio::test]
async fn test_update_can_clear_optional_fields() {
    let service = service();
    let scope = scope("user-1");
    let created = service
        .create_contact(&scope, draft("Alice").with_notes("old notes"))
        .await
        .unwrap();

    let updated = service
        .update_contact(&scope, created.id(), ContactPatch::new().set_notes(""))
        .await
        .unwrap();
    assert_eq!(updated.notes(), None);
}

#[tokio::test]
async fn test_update_rejects_blank_name() {
    let service = service();
    let scope = scope("user-1");
    let created = service
        .create_contact(&scope, draft("Alice"))
        .await
        .unwrap();

    let err = service
        .update_contact(&scope, created.id(), ContactPatch::new().set_name("  "))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::MissingRequiredField { field: "name" })
    ));

    // Record unchanged
    let fetched = service.get_contact(&scope, created.id()).await.unwrap();
    assert_eq!(fetched.name(), "Alice");
}

#[tokio::test]
async fn test_invalid_patch_applies_nothing() {
    let service = service();
    let scope = scope("user-1");
    let created = service
        .create_contact(&scope, draft("Alice").with_company("Acme"))
        .await
        .unwrap();

    let err = service
        .update_contact(
            &scope,
            created.id(),
            ContactPatch::new()
                .set_company("NewCo")
                .set_email("not-an-email"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let fetched = service.get_contact(&scope, created.id()).await.unwrap();
    assert_eq!(fetched.company(), Some("Acme"));
    assert_eq!(fetched.email(), None);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let service = service();
    let err = service
        .update_contact(
            &scope("user-1"),
            ContactId::new(),
            ContactPatch::new().set_company("NewCo"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_is_immediate_and_final() {
    let service = service();
    let scope = scope("user-1");
    let created = service
        .create_contact(&scope, draft("Alice"))
        .await
        .unwrap();

    let deleted = service.delete_contact(&scope, created.id()).await.unwrap();
    assert_eq!(deleted.id(), created.id());

    let err = service.get_contact(&scope, created.id()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let err = service
        .delete_contact(&scope, created.id())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn test_deleted_contact_leaves_no_filter_matches() {
    let service = service();
    let scope = scope("user-1");
    let contacts = seed(
        &service,
        &scope,
        vec![
            draft("Alice").with_company("Acme"),
            draft("Bob").with_company("Acme"),
        ],
    )
    .await;

    service.delete_contact(&scope, contacts[0].id()).await.unwrap();

    let page = service
        .list_contacts(&scope, &ContactQuery::new().with_company("acme"))
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.contacts[0].name(), "Bob");
}
