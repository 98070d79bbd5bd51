//! Error types for the contact store.
//!
//! This module defines all error types used throughout the store, following
//! a hierarchy that separates validation errors, not-found results, and
//! backend failures.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::ContactId;

/// The primary error type for all store operations.
///
/// Validation errors are detected before any store access; not-found errors
/// are reported uniformly regardless of whether the record exists under
/// another owner; backend errors abort the in-flight operation without
/// partial effect.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Malformed or unsupported input, rejected before touching storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The identifier does not resolve to a record owned by the caller.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The underlying store is unavailable or an operation failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors for malformed or unsupported request input.
///
/// Every variant names the offending field. Malformed filter values are
/// rejected rather than silently dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// A field value is present but malformed.
    #[error("invalid value for {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    /// The requested sort field is not in the sortable set.
    #[error("unknown sort field: {value}")]
    UnknownSortField { value: String },

    /// The requested sort order is neither "asc" nor "desc".
    #[error("unknown sort order: {value}")]
    UnknownSortOrder { value: String },

    /// A pagination parameter that must be >= 1 was zero.
    #[error("{field} must be a positive integer")]
    NonPositive { field: &'static str },
}

/// The identifier does not resolve to a record owned by the caller.
///
/// A record that exists but belongs to a different owner produces exactly
/// this error; there is no distinguishable "forbidden" signal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("contact not found: {id}")]
pub struct NotFoundError {
    /// The contact id that did not resolve.
    pub id: ContactId,
}

/// Errors originating from the storage backend.
///
/// Backend detail is for operators; collaborators surface these to end
/// callers as a generic failure.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: &'static str,
        message: String,
    },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: &'static str,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingRequiredField { field: "name" };
        assert_eq!(err.to_string(), "missing required field: name");

        let err = ValidationError::UnknownSortField {
            value: "howMet".to_string(),
        };
        assert_eq!(err.to_string(), "unknown sort field: howMet");

        let err = ValidationError::NonPositive { field: "limit" };
        assert_eq!(err.to_string(), "limit must be a positive integer");
    }

    #[test]
    fn test_not_found_display() {
        let id = ContactId::new();
        let err = NotFoundError { id };
        assert_eq!(err.to_string(), format!("contact not found: {}", id));
    }

    #[test]
    fn test_store_error_wraps_categories() {
        let err: StoreError = ValidationError::NonPositive { field: "page" }.into();
        assert!(matches!(err, StoreError::Validation(_)));

        let err: StoreError = NotFoundError { id: ContactId::new() }.into();
        assert!(matches!(err, StoreError::NotFound(_)));

        let err: StoreError = BackendError::Unavailable {
            backend_name: "memory",
            message: "poisoned".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[test]
    fn test_transparent_messages() {
        let err: StoreError = ValidationError::InvalidField {
            field: "email",
            message: "must be a well-formed email address".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid value for email: must be a well-formed email address"
        );
    }
}
