//! Contact query specification.
//!
//! This module defines [`ContactQuery`], the typed, enumerated description
//! of one list request: optional per-field filters, a page request, and a
//! sort directive. The sortable fields are a fixed whitelist; there is no
//! open-ended mapping of arbitrary field names to values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::contact::{Contact, validate_email_field};

/// The fields a result set may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Sort by contact name (the default).
    #[default]
    Name,
    /// Sort by company.
    Company,
    /// Sort by role.
    Role,
    /// Sort by email address.
    Email,
    /// Sort by phone number.
    PhoneNumber,
}

impl SortField {
    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Company => "company",
            SortField::Role => "role",
            SortField::Email => "email",
            SortField::PhoneNumber => "phoneNumber",
        }
    }

    /// Returns the sortable value of the field on the given contact.
    ///
    /// `name` is always present; every other field may be absent. Absent
    /// values order before present ones ascending.
    pub fn value_of<'a>(&self, contact: &'a Contact) -> Option<&'a str> {
        match self {
            SortField::Name => Some(contact.name()),
            SortField::Company => contact.company(),
            SortField::Role => contact.role(),
            SortField::Email => contact.email(),
            SortField::PhoneNumber => contact.phone_number(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "company" => Ok(SortField::Company),
            "role" => Ok(SortField::Role),
            "email" => Ok(SortField::Email),
            "phoneNumber" => Ok(SortField::PhoneNumber),
            _ => Err(ValidationError::UnknownSortField {
                value: s.to_string(),
            }),
        }
    }
}

/// Sort direction for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (the default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Returns the wire name of the order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ValidationError::UnknownSortOrder {
                value: s.to_string(),
            }),
        }
    }
}

/// One list request: optional partial-match filters, a page request, and a
/// sort directive.
///
/// Present filters are ANDed together; each is a case-insensitive literal
/// substring match against its field. Blank filter values contribute no
/// constraint. Defaults: page 1, limit 10, sorted by name ascending.
///
/// # Examples
///
/// ```
/// use rolodex_store::types::{ContactQuery, SortField, SortOrder};
///
/// let query = ContactQuery::new()
///     .with_company("acme")
///     .with_sort(SortField::Name)
///     .with_order(SortOrder::Desc)
///     .with_limit(25);
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactQuery {
    /// Substring filter on the name field.
    pub name: Option<String>,
    /// Substring filter on the company field.
    pub company: Option<String>,
    /// Substring filter on the role field.
    pub role: Option<String>,
    /// Substring filter on the email field; must itself be a well-formed
    /// email address.
    pub email: Option<String>,
    /// Substring filter on the phone number field.
    pub phone_number: Option<String>,
    /// Substring filter on the notes field.
    pub notes: Option<String>,
    /// Page number, 1-based.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Sort field.
    pub sort_by: SortField,
    /// Sort direction.
    pub order: SortOrder,
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self {
            name: None,
            company: None,
            role: None,
            email: None,
            phone_number: None,
            notes: None,
            page: 1,
            limit: 10,
            sort_by: SortField::default(),
            order: SortOrder::default(),
        }
    }
}

impl ContactQuery {
    /// Creates a query with no filters and default paging and sorting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name filter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a company filter.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Adds a role filter.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Adds an email filter.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds a phone number filter.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Adds a notes filter.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the sort field.
    pub fn with_sort(mut self, sort_by: SortField) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Sets the sort direction.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Validates the query before any store access.
    ///
    /// Rejects a zero page or limit and a malformed email filter value.
    /// Malformed filters are rejected, never silently dropped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page == 0 {
            return Err(ValidationError::NonPositive { field: "page" });
        }
        if self.limit == 0 {
            return Err(ValidationError::NonPositive { field: "limit" });
        }
        validate_email_field(self.email.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_roundtrip() {
        for field in [
            SortField::Name,
            SortField::Company,
            SortField::Role,
            SortField::Email,
            SortField::PhoneNumber,
        ] {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
    }

    #[test]
    fn test_sort_field_rejects_unknown() {
        let err = "howMet".parse::<SortField>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownSortField {
                value: "howMet".to_string()
            }
        );
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("descending".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_query_defaults() {
        let query = ContactQuery::new();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort_by, SortField::Name);
        assert_eq!(query.order, SortOrder::Asc);
        query.validate().unwrap();
    }

    #[test]
    fn test_query_rejects_zero_page_and_limit() {
        let err = ContactQuery::new().with_page(0).validate().unwrap_err();
        assert_eq!(err, ValidationError::NonPositive { field: "page" });

        let err = ContactQuery::new().with_limit(0).validate().unwrap_err();
        assert_eq!(err, ValidationError::NonPositive { field: "limit" });
    }

    #[test]
    fn test_query_rejects_malformed_email_filter() {
        let err = ContactQuery::new()
            .with_email("acme.io")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidField { field: "email", .. }
        ));
    }

    #[test]
    fn test_query_deserializes_wire_names() {
        let query: ContactQuery = serde_json::from_str(
            r#"{"phoneNumber": "555", "sortBy": "phoneNumber", "order": "desc", "limit": 5}"#,
        )
        .unwrap();
        assert_eq!(query.phone_number.as_deref(), Some("555"));
        assert_eq!(query.sort_by, SortField::PhoneNumber);
        assert_eq!(query.order, SortOrder::Desc);
        assert_eq!(query.limit, 5);
        assert_eq!(query.page, 1);
    }
}
