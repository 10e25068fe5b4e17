//! Backing stores a resource client can route an operation to.

use crate::error::Result;
use async_trait::async_trait;
use postboard_store::{FallbackStore, Stored};

/// CRUD contract shared by the remote API and the fallback store.
///
/// A single operation runs entirely against one implementation.
#[async_trait]
pub trait Backend<R: Stored>: Send + Sync {
    /// Every entity of the collection
    async fn get_all(&self) -> Result<Vec<R>>;

    /// One entity, or `NotFound`
    async fn get_by_id(&self, id: i64) -> Result<R>;

    /// Entities owned by `user_id`, possibly none
    async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<R>>;

    /// Create an entity; the backend assigns the id
    async fn create(&self, data: R::New) -> Result<R>;

    /// Merge a partial update over an existing entity
    async fn update(&self, id: i64, patch: R::Patch) -> Result<R>;

    /// Remove an entity; absent ids are not an error
    async fn delete(&self, id: i64) -> Result<()>;
}

#[async_trait]
impl<R: Stored> Backend<R> for FallbackStore {
    async fn get_all(&self) -> Result<Vec<R>> {
        Ok(self.list::<R>().await)
    }

    async fn get_by_id(&self, id: i64) -> Result<R> {
        Ok(self.get::<R>(id).await?)
    }

    async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<R>> {
        Ok(self.filter_by_user_id::<R>(user_id).await)
    }

    async fn create(&self, data: R::New) -> Result<R> {
        Ok(FallbackStore::create::<R>(self, data).await?)
    }

    async fn update(&self, id: i64, patch: R::Patch) -> Result<R> {
        Ok(FallbackStore::update::<R>(self, id, patch).await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        FallbackStore::delete::<R>(self, id).await;
        Ok(())
    }
}
