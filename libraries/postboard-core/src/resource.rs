//! Resource trait shared by every collection entity

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The collections exposed by the remote API and mirrored by the fallback store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// `/users`
    Users,
    /// `/posts`
    Posts,
}

impl ResourceKind {
    /// Path segment of the collection endpoint (no leading slash)
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Posts => "posts",
        }
    }

    /// Whether entities of this collection reference an owning user
    pub fn has_owner(&self) -> bool {
        matches!(self, ResourceKind::Posts)
    }

    /// Singular entity name used in messages
    pub fn entity_name(&self) -> &'static str {
        match self {
            ResourceKind::Users => "User",
            ResourceKind::Posts => "Post",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity_name())
    }
}

/// An entity living in one of the collections.
///
/// Both backing stores (remote API and fallback store) speak this contract,
/// so the resilient client can be written once and instantiated per
/// collection.
pub trait Resource:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload accepted by create (the entity minus its id)
    type New: Clone + fmt::Debug + Serialize + Send + Sync + 'static;

    /// Partial update payload; a field is present iff it is `Some`
    type Patch: Clone
        + fmt::Debug
        + Default
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Collection this entity belongs to
    const KIND: ResourceKind;

    /// Store-assigned identifier
    fn id(&self) -> i64;

    /// Build an entity from a create payload and a freshly assigned id
    fn from_new(id: i64, data: Self::New) -> Self;

    /// Build an entity from a partial update; absent fields are left empty
    fn from_patch(id: i64, patch: Self::Patch) -> Self;

    /// Merge `patch` over `self`, field by field.
    ///
    /// Fields absent from the patch keep their current value.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Owning user, for entities that reference one
    fn user_id(&self) -> Option<i64> {
        None
    }
}
