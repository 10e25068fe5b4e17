//! Fallback store implementation.

use crate::error::{Result, StoreError};
use crate::seed::{sample_posts, sample_users};
use postboard_core::{Post, Resource, User};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// One collection of entities plus its id counter.
#[derive(Debug, Clone)]
pub struct Table<R> {
    rows: Vec<R>,
    /// Highest id ever held by this table, so deleted ids are not handed out again
    high_water: i64,
}

impl<R: Resource> Table<R> {
    fn from_rows(rows: Vec<R>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.id()) {
                return Err(StoreError::DuplicateId {
                    resource: R::KIND,
                    id: row.id(),
                });
            }
        }

        Ok(Self::seeded(rows))
    }

    fn seeded(rows: Vec<R>) -> Self {
        let high_water = rows.iter().map(Resource::id).max().unwrap_or(0);
        Self { rows, high_water }
    }

    fn next_id(&self) -> Result<i64> {
        let max_existing = self.rows.iter().map(Resource::id).max().unwrap_or(0);
        let last = max_existing.max(self.high_water);
        last.checked_add(1).ok_or(StoreError::IdsExhausted {
            resource: R::KIND,
            last,
        })
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            high_water: 0,
        }
    }
}

/// The two collections held by a [`FallbackStore`].
#[derive(Debug, Clone, Default)]
pub struct Collections {
    users: Table<User>,
    posts: Table<Post>,
}

/// Entities that have a table inside [`Collections`].
pub trait Stored: Resource {
    /// Borrow this entity's table
    fn table(collections: &Collections) -> &Table<Self>;

    /// Mutably borrow this entity's table
    fn table_mut(collections: &mut Collections) -> &mut Table<Self>;
}

impl Stored for User {
    fn table(collections: &Collections) -> &Table<Self> {
        &collections.users
    }

    fn table_mut(collections: &mut Collections) -> &mut Table<Self> {
        &mut collections.users
    }
}

impl Stored for Post {
    fn table(collections: &Collections) -> &Table<Self> {
        &collections.posts
    }

    fn table_mut(collections: &mut Collections) -> &mut Table<Self> {
        &mut collections.posts
    }
}

/// In-memory users and posts, shared between clones.
///
/// Every operation holds the lock for its whole read-modify-write, so the
/// store can be used from a multi-threaded runtime.
#[derive(Debug, Clone)]
pub struct FallbackStore {
    inner: Arc<RwLock<Collections>>,
}

impl Default for FallbackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackStore {
    /// Create a store seeded with the sample dataset.
    pub fn new() -> Self {
        Self::from_collections(Collections {
            users: Table::seeded(sample_users()),
            posts: Table::seeded(sample_posts()),
        })
    }

    /// Create a store with no entities.
    pub fn empty() -> Self {
        Self::from_collections(Collections::default())
    }

    /// Create a store from explicit data.
    ///
    /// Fails if either collection holds the same id twice.
    pub fn with_data(users: Vec<User>, posts: Vec<Post>) -> Result<Self> {
        Ok(Self::from_collections(Collections {
            users: Table::from_rows(users)?,
            posts: Table::from_rows(posts)?,
        }))
    }

    fn from_collections(collections: Collections) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collections)),
        }
    }

    /// All entities of a collection, in insertion order.
    ///
    /// The returned vector is a copy; mutating it does not touch the store.
    pub async fn list<R: Stored>(&self) -> Vec<R> {
        let collections = self.inner.read().await;
        R::table(&collections).rows.clone()
    }

    /// Look up one entity by id.
    pub async fn get<R: Stored>(&self, id: i64) -> Result<R> {
        let collections = self.inner.read().await;
        let table = R::table(&collections);

        table
            .position(id)
            .map(|index| table.rows[index].clone())
            .ok_or_else(|| StoreError::not_found(R::KIND, id))
    }

    /// Insert a new entity with the next free id and return it.
    ///
    /// Fails only when the id space is used up.
    pub async fn create<R: Stored>(&self, data: R::New) -> Result<R> {
        let mut collections = self.inner.write().await;
        let table = R::table_mut(&mut collections);

        let id = table.next_id()?;
        let entity = R::from_new(id, data);
        table.rows.push(entity.clone());
        table.high_water = id;

        debug!(resource = %R::KIND, id, "Created entity in fallback store");
        Ok(entity)
    }

    /// Merge `patch` over an existing entity and return the result.
    pub async fn update<R: Stored>(&self, id: i64, patch: R::Patch) -> Result<R> {
        let mut collections = self.inner.write().await;
        let table = R::table_mut(&mut collections);

        let index = table
            .position(id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        let entity = &mut table.rows[index];
        entity.apply_patch(patch);

        debug!(resource = %R::KIND, id, "Updated entity in fallback store");
        Ok(entity.clone())
    }

    /// Remove an entity. Removing an absent id does nothing.
    pub async fn delete<R: Stored>(&self, id: i64) {
        let mut collections = self.inner.write().await;
        let table = R::table_mut(&mut collections);

        let before = table.rows.len();
        table.rows.retain(|row| row.id() != id);

        debug!(
            resource = %R::KIND,
            id,
            removed = before != table.rows.len(),
            "Deleted entity from fallback store"
        );
    }

    /// Entities whose owning user is `user_id`, in insertion order.
    ///
    /// Collections without an owner (users) always yield an empty list.
    pub async fn filter_by_user_id<R: Stored>(&self, user_id: i64) -> Vec<R> {
        let collections = self.inner.read().await;
        R::table(&collections)
            .rows
            .iter()
            .filter(|row| row.user_id() == Some(user_id))
            .cloned()
            .collect()
    }
}
