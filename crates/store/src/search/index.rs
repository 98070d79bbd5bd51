//! Per-field value indexes.
//!
//! For every `(owner, field)` pair the store keeps an ordered map from
//! normalized (lowercased) field value to the set of contact ids carrying
//! that value. Filtered queries scan the distinct values of one owner's
//! field rather than the whole record set, and the maps double as
//! equality/prefix structures since they are ordered by value.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::owner::OwnerId;
use crate::search::filter::{ContactPredicate, FilterField};
use crate::types::{Contact, ContactId};

/// The equality/prefix index family, one ordered map per `(owner, field)`.
///
/// Maintained atomically with every record mutation; a contact appears
/// under a field entry only while the field is present on the record.
#[derive(Debug, Default)]
pub(crate) struct FieldIndexes {
    entries: HashMap<(OwnerId, FilterField), BTreeMap<String, BTreeSet<ContactId>>>,
}

impl FieldIndexes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Indexes every present field of the contact.
    pub(crate) fn insert(&mut self, contact: &Contact) {
        for field in FilterField::ALL {
            if let Some(value) = field.value_of(contact) {
                self.entries
                    .entry((contact.owner_id().clone(), field))
                    .or_default()
                    .entry(value.to_lowercase())
                    .or_default()
                    .insert(contact.id());
            }
        }
    }

    /// Removes every index entry for the contact.
    pub(crate) fn remove(&mut self, contact: &Contact) {
        for field in FilterField::ALL {
            if let Some(value) = field.value_of(contact) {
                let key = (contact.owner_id().clone(), field);
                if let Some(values) = self.entries.get_mut(&key) {
                    let normalized = value.to_lowercase();
                    if let Some(ids) = values.get_mut(&normalized) {
                        ids.remove(&contact.id());
                        if ids.is_empty() {
                            values.remove(&normalized);
                        }
                    }
                    if values.is_empty() {
                        self.entries.remove(&key);
                    }
                }
            }
        }
    }

    /// Re-indexes a contact after a field change.
    pub(crate) fn update(&mut self, old: &Contact, new: &Contact) {
        self.remove(old);
        self.insert(new);
    }

    /// Resolves the ids matching a conjunctive predicate for one owner.
    ///
    /// Each filter becomes a scan over the distinct values of that owner's
    /// field index; the per-filter id sets are then intersected. Returns
    /// `None` for an unconstrained predicate (every record matches).
    pub(crate) fn matching_ids(
        &self,
        owner: &OwnerId,
        predicate: &ContactPredicate,
    ) -> Option<BTreeSet<ContactId>> {
        if predicate.is_unconstrained() {
            return None;
        }

        let mut matched: Option<BTreeSet<ContactId>> = None;
        for filter in predicate.filters() {
            let ids = self.ids_containing(owner, filter.field(), filter.needle());
            matched = Some(match matched {
                Some(acc) => acc.intersection(&ids).copied().collect(),
                None => ids,
            });
            if matched.as_ref().is_some_and(BTreeSet::is_empty) {
                break;
            }
        }
        matched
    }

    /// Ids of the owner's contacts whose field value contains the needle.
    fn ids_containing(
        &self,
        owner: &OwnerId,
        field: FilterField,
        needle: &str,
    ) -> BTreeSet<ContactId> {
        let Some(values) = self.entries.get(&(owner.clone(), field)) else {
            return BTreeSet::new();
        };
        values
            .iter()
            .filter(|(value, _)| value.contains(needle))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }
}
