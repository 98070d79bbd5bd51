//! Contact record types.
//!
//! This module defines the [`Contact`] record along with the typed payloads
//! used to create ([`ContactDraft`]) and partially update ([`ContactPatch`])
//! it. Payloads are validated before any store access; a patch either
//! applies all of its field changes or none of them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::owner::OwnerId;

/// A unique, system-assigned contact identifier.
///
/// Assigned once at creation and immutable afterwards. The ordering of ids
/// is the deterministic secondary sort key for result sets.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generates a fresh random id.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactId({})", self.0)
    }
}

impl FromStr for ContactId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A contact record with its persistence metadata.
///
/// Every contact belongs to exactly one owner; `owner_id` is set at
/// creation and never changed by any operation. `name` is always present
/// and non-empty; every other text field is optional. Timestamps are
/// system-maintained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique, immutable record id.
    id: ContactId,

    /// The principal that owns this record.
    owner_id: OwnerId,

    /// Free-text display name (required).
    name: String,

    company: Option<String>,
    role: Option<String>,
    how_met: Option<String>,
    linkedin_profile: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    notes: Option<String>,

    /// When the record was first created.
    created_at: DateTime<Utc>,

    /// When the record was last modified.
    updated_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a new record for the given owner from a draft.
    ///
    /// Assigns a fresh id and stamps both timestamps. The caller is
    /// expected to have validated the draft; blank optional fields are
    /// normalized to absent.
    pub fn create(owner_id: OwnerId, draft: ContactDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ContactId::new(),
            owner_id,
            name: draft.name,
            company: normalize(draft.company),
            role: normalize(draft.role),
            how_met: normalize(draft.how_met),
            linkedin_profile: normalize(draft.linkedin_profile),
            email: normalize(draft.email),
            phone_number: normalize(draft.phone_number),
            notes: normalize(draft.notes),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Returns the owning principal.
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Returns the contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the company, if recorded.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Returns the role, if recorded.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns how the contact was met, if recorded.
    pub fn how_met(&self) -> Option<&str> {
        self.how_met.as_deref()
    }

    /// Returns the LinkedIn profile URL, if recorded.
    pub fn linkedin_profile(&self) -> Option<&str> {
        self.linkedin_profile.as_deref()
    }

    /// Returns the email address, if recorded.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number, if recorded.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Returns the free-text notes, if recorded.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the record was last modified.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Produces the record with the patch's field changes applied.
    ///
    /// Id, owner, and `created_at` are untouched; `updated_at` is bumped.
    /// The patch carries no owner field, so ownership cannot change here by
    /// construction. The caller is expected to have validated the patch;
    /// patching an optional field to blank clears it.
    pub fn patched(self, patch: ContactPatch) -> Self {
        Self {
            id: self.id,
            owner_id: self.owner_id,
            name: patch.name.unwrap_or(self.name),
            company: patch_field(self.company, patch.company),
            role: patch_field(self.role, patch.role),
            how_met: patch_field(self.how_met, patch.how_met),
            linkedin_profile: patch_field(self.linkedin_profile, patch.linkedin_profile),
            email: patch_field(self.email, patch.email),
            phone_number: patch_field(self.phone_number, patch.phone_number),
            notes: patch_field(self.notes, patch.notes),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}

/// Typed payload for creating a contact.
///
/// `name` is required and must be non-blank; every other field is
/// optional. There is no owner field: ownership always comes from the
/// scope under which the draft is inserted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    /// Free-text display name (required).
    pub name: String,
    /// Company the contact works for.
    pub company: Option<String>,
    /// The contact's role or title.
    pub role: Option<String>,
    /// How the contact was met.
    pub how_met: Option<String>,
    /// LinkedIn profile URL; must be well-formed when present.
    pub linkedin_profile: Option<String>,
    /// Email address; must be well-formed when present.
    pub email: Option<String>,
    /// Phone number, free-form.
    pub phone_number: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl ContactDraft {
    /// Creates a draft with the given name and no other fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets how the contact was met.
    pub fn with_how_met(mut self, how_met: impl Into<String>) -> Self {
        self.how_met = Some(how_met.into());
        self
    }

    /// Sets the LinkedIn profile URL.
    pub fn with_linkedin_profile(mut self, profile: impl Into<String>) -> Self {
        self.linkedin_profile = Some(profile.into());
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Validates the draft, naming the first offending field.
    ///
    /// Runs before any store access: a blank name, a malformed email, or a
    /// malformed profile URL rejects the whole request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "name" });
        }
        validate_email_field(self.email.as_deref())?;
        validate_url_field(self.linkedin_profile.as_deref())?;
        Ok(())
    }
}

/// Typed payload for partially updating a contact.
///
/// Absent fields are left untouched. `name`, when present, must be
/// non-blank; patching an optional field to a blank string clears it.
/// The patch has no owner field, so an owner change cannot be expressed;
/// any such request content is ignored by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPatch {
    /// Replacement name; must be non-blank when present.
    pub name: Option<String>,
    /// Replacement company; blank clears the field.
    pub company: Option<String>,
    /// Replacement role; blank clears the field.
    pub role: Option<String>,
    /// Replacement how-met note; blank clears the field.
    pub how_met: Option<String>,
    /// Replacement profile URL; blank clears, otherwise must be well-formed.
    pub linkedin_profile: Option<String>,
    /// Replacement email; blank clears, otherwise must be well-formed.
    pub email: Option<String>,
    /// Replacement phone number; blank clears the field.
    pub phone_number: Option<String>,
    /// Replacement notes; blank clears the field.
    pub notes: Option<String>,
}

impl ContactPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement company.
    pub fn set_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the replacement role.
    pub fn set_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the replacement how-met note.
    pub fn set_how_met(mut self, how_met: impl Into<String>) -> Self {
        self.how_met = Some(how_met.into());
        self
    }

    /// Sets the replacement LinkedIn profile URL.
    pub fn set_linkedin_profile(mut self, profile: impl Into<String>) -> Self {
        self.linkedin_profile = Some(profile.into());
        self
    }

    /// Sets the replacement email address.
    pub fn set_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the replacement phone number.
    pub fn set_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the replacement notes.
    pub fn set_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns `true` if the patch changes no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.company.is_none()
            && self.role.is_none()
            && self.how_met.is_none()
            && self.linkedin_profile.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.notes.is_none()
    }

    /// Validates the patch, naming the first offending field.
    ///
    /// An invalid field rejects the whole patch before storage; no subset
    /// of the requested changes is ever applied.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ValidationError::MissingRequiredField { field: "name" });
        }
        validate_email_field(self.email.as_deref())?;
        validate_url_field(self.linkedin_profile.as_deref())?;
        Ok(())
    }
}

/// Normalizes an optional text field: blank becomes absent.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Applies one patch field: absent keeps the current value, blank clears.
fn patch_field(current: Option<String>, patch: Option<String>) -> Option<String> {
    match patch {
        Some(value) => normalize(Some(value)),
        None => current,
    }
}

/// Syntactic well-formedness check for email addresses.
///
/// Requires a single `@` with a non-empty local part and a dotted domain.
/// Not an RFC 5321 parser; the store only guarantees the value is shaped
/// like an address.
pub(crate) fn is_well_formed_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

pub(crate) fn validate_email_field(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(email) if !email.trim().is_empty() && !is_well_formed_email(email) => {
            Err(ValidationError::InvalidField {
                field: "email",
                message: "must be a well-formed email address".to_string(),
            })
        }
        _ => Ok(()),
    }
}

pub(crate) fn validate_url_field(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => {
            let parsed = Url::parse(raw).map_err(|_| ValidationError::InvalidField {
                field: "linkedinProfile",
                message: "must be a well-formed URL".to_string(),
            })?;
            if parsed.has_host() {
                Ok(())
            } else {
                Err(ValidationError::InvalidField {
                    field: "linkedinProfile",
                    message: "must be a well-formed URL".to_string(),
                })
            }
        }
        _ => Ok(()),
    }
}
