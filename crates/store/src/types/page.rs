//! Pagination types for list results.
//!
//! Pagination is offset-based: a 1-based page number and a page size
//! together select a bounded slice of the ordered result set.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::Contact;

/// A validated page request.
///
/// `page` and `limit` are both >= 1; `skip` is the number of records before
/// the requested slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Creates a page request, rejecting a zero page or limit.
    pub fn new(page: u32, limit: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::NonPositive { field: "page" });
        }
        if limit == 0 {
            return Err(ValidationError::NonPositive { field: "limit" });
        }
        Ok(Self { page, limit })
    }

    /// Returns the 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the number of records skipped before this page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Returns the total number of pages for the given match count.
    ///
    /// Zero when nothing matches.
    pub fn pages_for(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// One page of list results with its count metadata.
///
/// A page number past the last page is not an error: `contacts` is empty
/// while `total` and `pages` still describe the full match set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPage {
    /// Total number of matching records.
    pub total: u64,
    /// The requested 1-based page number.
    pub page: u32,
    /// Total number of pages at the requested page size.
    pub pages: u64,
    /// The records on this page, in sort order.
    pub contacts: Vec<Contact>,
}

impl ContactPage {
    /// Assembles the envelope for a page of results.
    pub fn assemble(request: PageRequest, total: u64, contacts: Vec<Contact>) -> Self {
        Self {
            total,
            page: request.page(),
            pages: request.pages_for(total),
            contacts,
        }
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns the number of records on this page.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}
