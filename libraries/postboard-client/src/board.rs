//! Users and posts clients bundled over one connection pool and one store.

use crate::client::ResourceClient;
use crate::error::Result;
use crate::remote::RemoteApi;
use crate::types::{ClientConfig, Mode, PostWithAuthor};
use postboard_core::{Post, User};
use postboard_store::FallbackStore;
use std::collections::HashMap;
use tracing::debug;

/// Entry point for front-ends: one resilient client per collection.
///
/// Both clients share the HTTP connection pool and the fallback store, so an
/// entity created through `users()` while offline is visible to later
/// offline reads.
pub struct Board {
    users: ResourceClient<User>,
    posts: ResourceClient<Post>,
}

impl Board {
    /// Create a board with a freshly seeded fallback store.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_store(config, FallbackStore::new())
    }

    /// Create a board over an existing fallback store.
    pub fn with_store(config: ClientConfig, store: FallbackStore) -> Result<Self> {
        let remote = RemoteApi::new(&config)?;

        Ok(Self {
            users: ResourceClient::from_parts(remote.clone(), store.clone(), &config),
            posts: ResourceClient::from_parts(remote, store, &config),
        })
    }

    /// Client for the users collection
    pub fn users(&self) -> &ResourceClient<User> {
        &self.users
    }

    /// Client for the posts collection
    pub fn posts(&self) -> &ResourceClient<Post> {
        &self.posts
    }

    /// The fallback store shared by both clients
    pub fn store(&self) -> &FallbackStore {
        self.users.store()
    }

    /// Normalized base URL of the remote API
    pub fn base_url(&self) -> &str {
        self.users.base_url()
    }

    /// Current reachability, as seen by a probe of the users endpoint.
    pub async fn mode(&self) -> Mode {
        self.users.probe().await
    }

    /// All posts, each with its author's name.
    ///
    /// Posts and users are fetched concurrently and both must succeed. Each
    /// fetch probes on its own, so the two lists can come from different
    /// backends. Posts whose author is unknown get `User {id}`.
    pub async fn posts_with_authors(&self) -> Result<Vec<PostWithAuthor>> {
        let (posts, users) = tokio::try_join!(self.posts.get_all(), self.users.get_all())?;

        let names: HashMap<i64, String> = users.into_iter().map(|u| (u.id, u.name)).collect();
        debug!(
            posts = posts.len(),
            authors = names.len(),
            "Joined posts with authors"
        );

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = names
                    .get(&post.user_id)
                    .cloned()
                    .unwrap_or_else(|| format!("User {}", post.user_id));
                PostWithAuthor { post, author }
            })
            .collect())
    }
}
