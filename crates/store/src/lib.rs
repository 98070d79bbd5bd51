//! Rolodex Contact Store
//!
//! This crate is the contact retrieval engine behind Rolodex: it turns an
//! arbitrary combination of partial-match field filters, a sort key, and a
//! page request into a correctly scoped, ordered, paginated result set,
//! backed by per-field indexes and a relevance-weighted text index.
//!
//! Surrounding concerns - HTTP routing, credential issuance, password
//! hashing, request logging, process bootstrap - live in the calling
//! collaborator. Its contract with this crate is small: supply an
//! authenticated principal as an [`OwnerScope`](owner::OwnerScope) before
//! any query runs, pass validated, typed parameters in, and relay the
//! result verbatim.
//!
//! # Architecture
//!
//! - [`owner`] - principal identity and the mandatory per-operation scope
//! - [`types`] - contact records, query specification, page envelope
//! - [`search`] - filter compilation and the index structures
//! - [`store`] - the [`ContactStore`](store::ContactStore) trait and the
//!   in-memory backend
//! - [`service`] - the orchestrator composing the above per operation
//! - [`error`] - error types for all operations
//!
//! # Quick Start
//!
//! ```
//! use rolodex_store::owner::{OwnerId, OwnerScope};
//! use rolodex_store::service::ContactService;
//! use rolodex_store::store::MemoryStore;
//! use rolodex_store::types::{ContactDraft, ContactQuery, SortField, SortOrder};
//!
//! # tokio_test::block_on(async {
//! let service = ContactService::new(MemoryStore::new());
//! let scope = OwnerScope::new(OwnerId::new("user-1"));
//!
//! service
//!     .create_contact(
//!         &scope,
//!         ContactDraft::new("Alice Chen")
//!             .with_company("Acme")
//!             .with_email("alice@acme.io"),
//!     )
//!     .await?;
//!
//! let page = service
//!     .list_contacts(
//!         &scope,
//!         &ContactQuery::new()
//!             .with_company("acme")
//!             .with_sort(SortField::Name)
//!             .with_order(SortOrder::Asc),
//!     )
//!     .await?;
//!
//! assert_eq!(page.total, 1);
//! assert_eq!(page.contacts[0].name(), "Alice Chen");
//! # Ok::<(), rolodex_store::StoreError>(())
//! # }).unwrap();
//! ```
//!
//! # Ownership
//!
//! Every operation requires an [`OwnerScope`](owner::OwnerScope) and acts
//! only on that principal's records. A record owned by someone else is
//! reported as not found, never as forbidden, so callers cannot probe for
//! the existence of other principals' records.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod owner;
pub mod search;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BackendError, NotFoundError, StoreError, StoreResult, ValidationError};
pub use owner::{OwnerId, OwnerScope};
pub use search::ContactPredicate;
pub use service::ContactService;
pub use store::{ContactStore, MemoryStore};
pub use types::{
    Contact, ContactDraft, ContactId, ContactPage, ContactPatch, ContactQuery, SortField,
    SortOrder,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
