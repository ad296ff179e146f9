//! # Domain models for user records
//!
//! Defines the values exchanged with the remote user service and the drafts the
//! panel stages before submitting them. These types are `Serialize + Deserialize`
//! so the same structs describe both the JSON wire format and the in-memory state.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | A user as stored by the remote service. `id` is server-assigned and travels as `_id` on the wire. |
//! | [`UserDraft`] | An unsaved, id-less record: the body of a create request and the working copy of an edit. |
//! | [`UserPatch`] | A partial record for update requests; absent fields are left out of the JSON body. |
//! | [`UserField`] | Addresses one input of a draft (`name`, `email`, `mobile`). |
//! | [`RecordSelector`] | How soft-delete and restore pick a record: by id or, in compatibility mode, by name. |

use serde::{Deserialize, Serialize};

/// A user record owned by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identity.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
        }
    }

    /// Copy the editable fields into a draft.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
        }
    }

    /// Return a copy with `patch` applied on top.
    pub fn patched(&self, patch: &UserPatch) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            mobile: patch.mobile.clone().unwrap_or_else(|| self.mobile.clone()),
        }
    }
}

/// Record-shaped value without an id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
        }
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Mobile => &self.mobile,
        }
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Mobile => self.mobile = value,
        }
    }

    /// Fields left empty. Whitespace counts as a value, as it does for a
    /// `required` text input.
    pub fn missing_fields(&self) -> Vec<UserField> {
        UserField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Every required field is present.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Partial record body for updates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl UserPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.mobile.is_none()
    }
}

impl From<UserDraft> for UserPatch {
    fn from(draft: UserDraft) -> Self {
        Self {
            name: Some(draft.name),
            email: Some(draft.email),
            mobile: Some(draft.mobile),
        }
    }
}

/// One editable input of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Mobile,
}

impl UserField {
    pub const ALL: [UserField; 3] = [UserField::Name, UserField::Email, UserField::Mobile];

    /// Form input name, matching the JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Mobile => "mobile",
        }
    }
}

/// How a record is located in one of the partitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordSelector {
    Id(String),
    /// First record with this name. Ambiguous when names repeat.
    Name(String),
}

impl RecordSelector {
    pub fn matches(&self, record: &UserRecord) -> bool {
        match self {
            RecordSelector::Id(id) => &record.id == id,
            RecordSelector::Name(name) => &record.name == name,
        }
    }
}

impl std::fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSelector::Id(id) => write!(f, "id={id}"),
            RecordSelector::Name(name) => write!(f, "name={name}"),
        }
    }
}
