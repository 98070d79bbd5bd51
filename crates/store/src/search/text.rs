//! Relevance-weighted composite text index.
//!
//! One index spans the name, company, role, how-met, and notes fields.
//! Each field carries a fixed relevance weight: name 5, company 3, role 3,
//! notes 1, how-met the default of 1. Name is the dominant signal, company
//! and role are equally next, notes is the weakest of the weighted fields.

use std::collections::{BTreeMap, HashMap};

use crate::owner::OwnerId;
use crate::types::{Contact, ContactId};

/// The default weight for indexed fields without an explicit weight.
const DEFAULT_WEIGHT: f64 = 1.0;

/// The fields covered by the composite text index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// The contact name (weight 5).
    Name,
    /// The company field (weight 3).
    Company,
    /// The role field (weight 3).
    Role,
    /// The how-met field (default weight).
    HowMet,
    /// The notes field (weight 1).
    Notes,
}

impl TextField {
    /// Every indexed field, in a fixed order.
    pub const ALL: [TextField; 5] = [
        TextField::Name,
        TextField::Company,
        TextField::Role,
        TextField::HowMet,
        TextField::Notes,
    ];

    /// Returns the field's fixed relevance weight.
    pub fn weight(&self) -> f64 {
        match self {
            TextField::Name => 5.0,
            TextField::Company => 3.0,
            TextField::Role => 3.0,
            TextField::HowMet => DEFAULT_WEIGHT,
            TextField::Notes => 1.0,
        }
    }

    /// Returns the indexed value of the field on the given contact.
    pub fn value_of<'a>(&self, contact: &'a Contact) -> Option<&'a str> {
        match self {
            TextField::Name => Some(contact.name()),
            TextField::Company => contact.company(),
            TextField::Role => contact.role(),
            TextField::HowMet => contact.how_met(),
            TextField::Notes => contact.notes(),
        }
    }
}

/// Per-owner inverted index from token to posting weights.
///
/// A contact's score for a query is the sum, over the query's tokens, of
/// the weights accumulated for that token across the contact's indexed
/// fields. Maintained atomically with every record mutation.
#[derive(Debug, Default)]
pub struct TextIndex {
    postings: HashMap<OwnerId, HashMap<String, BTreeMap<ContactId, f64>>>,
}

impl TextIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every covered field of the contact.
    pub fn insert(&mut self, contact: &Contact) {
        let owner = self.postings.entry(contact.owner_id().clone()).or_default();
        for field in TextField::ALL {
            let Some(value) = field.value_of(contact) else {
                continue;
            };
            for token in tokenize(value) {
                let entry = owner
                    .entry(token)
                    .or_default()
                    .entry(contact.id())
                    .or_insert(0.0);
                *entry += field.weight();
            }
        }
    }

    /// Removes every posting for the contact.
    pub fn remove(&mut self, contact: &Contact) {
        let Some(owner) = self.postings.get_mut(contact.owner_id()) else {
            return;
        };
        owner.retain(|_, ids| {
            ids.remove(&contact.id());
            !ids.is_empty()
        });
        if owner.is_empty() {
            self.postings.remove(contact.owner_id());
        }
    }

    /// Re-indexes a contact after a field change.
    pub fn update(&mut self, old: &Contact, new: &Contact) {
        self.remove(old);
        self.insert(new);
    }

    /// Ranks the owner's contacts against a free-text query.
    ///
    /// Scores descending, ties broken by record id ascending; at most
    /// `limit` entries. A query with no indexable tokens ranks nothing.
    pub fn rank(&self, owner: &OwnerId, query: &str, limit: usize) -> Vec<(ContactId, f64)> {
        let Some(postings) = self.postings.get(owner) else {
            return Vec::new();
        };

        let mut scores: BTreeMap<ContactId, f64> = BTreeMap::new();
        for token in tokenize(query) {
            if let Some(ids) = postings.get(&token) {
                for (id, weight) in ids {
                    *scores.entry(*id).or_insert(0.0) += weight;
                }
            }
        }

        let mut ranked: Vec<(ContactId, f64)> = scores.into_iter().collect();
        ranked.sort_by(|(a_id, a_score), (b_id, b_score)| {
            b_score
                .partial_cmp(a_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a_id.cmp(b_id))
        });
        ranked.truncate(limit);
        ranked
    }
}

/// Splits text into lowercase alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
