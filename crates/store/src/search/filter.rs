//! Filter compilation.
//!
//! A query's optional field filters compile to a conjunctive predicate:
//! absent filters contribute no constraint, present filters each require a
//! case-insensitive literal substring match on their field, and all present
//! filters must hold at once. Matching never builds a pattern from user
//! text; it is plain lowercase `contains`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Contact, ContactQuery};

/// The fields a filter may constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    /// The contact name.
    Name,
    /// The company field.
    Company,
    /// The role field.
    Role,
    /// The email field.
    Email,
    /// The phone number field.
    PhoneNumber,
    /// The notes field.
    Notes,
}

impl FilterField {
    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Company => "company",
            FilterField::Role => "role",
            FilterField::Email => "email",
            FilterField::PhoneNumber => "phoneNumber",
            FilterField::Notes => "notes",
        }
    }

    /// Every filterable field, in a fixed order.
    pub const ALL: [FilterField; 6] = [
        FilterField::Name,
        FilterField::Company,
        FilterField::Role,
        FilterField::Email,
        FilterField::PhoneNumber,
        FilterField::Notes,
    ];

    /// Returns the filtered value of the field on the given contact.
    pub fn value_of<'a>(&self, contact: &'a Contact) -> Option<&'a str> {
        match self {
            FilterField::Name => Some(contact.name()),
            FilterField::Company => contact.company(),
            FilterField::Role => contact.role(),
            FilterField::Email => contact.email(),
            FilterField::PhoneNumber => contact.phone_number(),
            FilterField::Notes => contact.notes(),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One compiled field constraint: a lowercase needle against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    field: FilterField,
    needle: String,
}

impl FieldFilter {
    /// Compiles a constraint from raw filter text.
    pub fn new(field: FilterField, raw: &str) -> Self {
        Self {
            field,
            needle: raw.to_lowercase(),
        }
    }

    /// Returns the constrained field.
    pub fn field(&self) -> FilterField {
        self.field
    }

    /// Returns the lowercased needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Returns `true` if the contact's field contains the needle.
    ///
    /// A contact whose field is absent never matches a present filter.
    pub fn matches(&self, contact: &Contact) -> bool {
        self.field
            .value_of(contact)
            .is_some_and(|value| value.to_lowercase().contains(&self.needle))
    }
}

/// The compiled, conjunctive predicate for one list request.
///
/// # Examples
///
/// ```
/// use rolodex_store::search::ContactPredicate;
/// use rolodex_store::types::ContactQuery;
///
/// let query = ContactQuery::new().with_company("acme").with_role("eng");
/// let predicate = ContactPredicate::compile(&query);
/// assert_eq!(predicate.filters().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactPredicate {
    filters: Vec<FieldFilter>,
}

impl ContactPredicate {
    /// Compiles the predicate from a validated query.
    ///
    /// Blank filter values contribute no constraint.
    pub fn compile(query: &ContactQuery) -> Self {
        let sources = [
            (FilterField::Name, query.name.as_deref()),
            (FilterField::Company, query.company.as_deref()),
            (FilterField::Role, query.role.as_deref()),
            (FilterField::Email, query.email.as_deref()),
            (FilterField::PhoneNumber, query.phone_number.as_deref()),
            (FilterField::Notes, query.notes.as_deref()),
        ];

        let filters = sources
            .into_iter()
            .filter_map(|(field, raw)| match raw {
                Some(raw) if !raw.trim().is_empty() => Some(FieldFilter::new(field, raw)),
                _ => None,
            })
            .collect();

        Self { filters }
    }

    /// Returns the compiled field constraints.
    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }

    /// Returns `true` if no filter is present.
    pub fn is_unconstrained(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns `true` if the contact satisfies every present filter.
    pub fn matches(&self, contact: &Contact) -> bool {
        self.filters.iter().all(|filter| filter.matches(contact))
    }
}
