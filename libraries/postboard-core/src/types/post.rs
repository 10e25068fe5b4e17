/// Post domain types
use crate::resource::{Resource, ResourceKind};
use serde::{Deserialize, Serialize};

/// A post written by a user.
///
/// `user_id` is not checked against the users collection; dangling
/// references are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier
    pub id: i64,

    /// Author's user id
    pub user_id: i64,

    /// Headline
    pub title: String,

    /// Text content
    pub body: String,
}

/// Payload for creating a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Author's user id
    pub user_id: i64,
    /// Headline
    pub title: String,
    /// Text content
    pub body: String,
}

impl NewPost {
    /// Create a new post payload
    pub fn new(user_id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Partial update for a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    /// New author id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// New headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PostPatch {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.title.is_none() && self.body.is_none()
    }
}

impl From<NewPost> for PostPatch {
    fn from(data: NewPost) -> Self {
        Self {
            user_id: Some(data.user_id),
            title: Some(data.title),
            body: Some(data.body),
        }
    }
}

impl Resource for Post {
    type New = NewPost;
    type Patch = PostPatch;

    const KIND: ResourceKind = ResourceKind::Posts;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_new(id: i64, data: NewPost) -> Self {
        Self {
            id,
            user_id: data.user_id,
            title: data.title,
            body: data.body,
        }
    }

    fn from_patch(id: i64, patch: PostPatch) -> Self {
        Self {
            id,
            user_id: patch.user_id.unwrap_or_default(),
            title: patch.title.unwrap_or_default(),
            body: patch.body.unwrap_or_default(),
        }
    }

    fn apply_patch(&mut self, patch: PostPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
    }

    fn user_id(&self) -> Option<i64> {
        Some(self.user_id)
    }
}
