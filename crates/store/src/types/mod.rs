//! Core types for contact records, queries, and result pages.

mod contact;
mod page;
mod query;

pub use contact::{Contact, ContactDraft, ContactId, ContactPatch};
pub use page::{ContactPage, PageRequest};
pub use query::{ContactQuery, SortField, SortOrder};
