/// User domain types
use crate::resource::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};

/// User account
///
/// Remote responses carry extra fields (address, phone, company); they are
/// ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Login handle
    pub username: String,

    /// Contact address
    pub email: String,
}

/// Payload for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Login handle
    pub username: String,
    /// Contact address
    pub email: String,
}

impl NewUser {
    /// Create a new user payload
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Partial update for a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New login handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New contact address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.username.is_none() && self.email.is_none()
    }
}

impl From<NewUser> for UserPatch {
    fn from(data: NewUser) -> Self {
        Self {
            name: Some(data.name),
            username: Some(data.username),
            email: Some(data.email),
        }
    }
}

impl Resource for User {
    type New = NewUser;
    type Patch = UserPatch;

    const KIND: ResourceKind = ResourceKind::Users;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_new(id: i64, data: NewUser) -> Self {
        Self {
            id,
            name: data.name,
            username: data.username,
            email: data.email,
        }
    }

    fn from_patch(id: i64, patch: UserPatch) -> Self {
        Self {
            id,
            name: patch.name.unwrap_or_default(),
            username: patch.username.unwrap_or_default(),
            email: patch.email.unwrap_or_default(),
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}
