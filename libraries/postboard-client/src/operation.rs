//! Operations a resource client can dispatch, and their results.

use crate::backend::Backend;
use crate::error::{ClientError, Result};
use postboard_core::Resource;
use postboard_store::Stored;

/// One request against a collection, independent of where it will run.
#[derive(Debug, Clone)]
pub enum Operation<R: Resource> {
    /// Every entity of the collection
    GetAll,
    /// One entity by id
    GetById(i64),
    /// Entities owned by a user.
    ///
    /// Only posts have owners; for other collections this yields an empty
    /// list without contacting either backend.
    GetByUserId(i64),
    /// Create from a payload; the backend assigns the id
    Create(R::New),
    /// Merge a partial update over the entity with this id
    Update(i64, R::Patch),
    /// Remove the entity with this id
    Delete(i64),
}

/// What an operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R> {
    /// Result of `GetAll` and `GetByUserId`
    Many(Vec<R>),
    /// Result of `GetById`, `Create` and `Update`
    One(R),
    /// Result of `Delete`
    Deleted,
}

impl<R: Resource> Operation<R> {
    /// Short name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetAll => "get_all",
            Operation::GetById(_) => "get_by_id",
            Operation::GetByUserId(_) => "get_by_user_id",
            Operation::Create(_) => "create",
            Operation::Update(..) => "update",
            Operation::Delete(_) => "delete",
        }
    }
}

impl<R: Stored> Operation<R> {
    /// Run the operation to completion against a single backend.
    pub(crate) async fn run(self, backend: &dyn Backend<R>) -> Result<Outcome<R>> {
        let outcome = match self {
            Operation::GetAll => Outcome::Many(backend.get_all().await?),
            Operation::GetById(id) => Outcome::One(backend.get_by_id(id).await?),
            Operation::GetByUserId(_) if !R::KIND.has_owner() => Outcome::Many(Vec::new()),
            Operation::GetByUserId(user_id) => {
                Outcome::Many(backend.get_by_user_id(user_id).await?)
            }
            Operation::Create(data) => Outcome::One(backend.create(data).await?),
            Operation::Update(id, patch) => Outcome::One(backend.update(id, patch).await?),
            Operation::Delete(id) => {
                backend.delete(id).await?;
                Outcome::Deleted
            }
        };
        Ok(outcome)
    }
}

impl<R> Outcome<R> {
    /// Unwrap a `Many` outcome
    pub fn into_many(self) -> Result<Vec<R>> {
        match self {
            Outcome::Many(entities) => Ok(entities),
            _ => Err(ClientError::UnexpectedOutcome("collection")),
        }
    }

    /// Unwrap a `One` outcome
    pub fn into_one(self) -> Result<R> {
        match self {
            Outcome::One(entity) => Ok(entity),
            _ => Err(ClientError::UnexpectedOutcome("single entity")),
        }
    }

    /// Unwrap a `Deleted` outcome
    pub fn into_deleted(self) -> Result<()> {
        match self {
            Outcome::Deleted => Ok(()),
            _ => Err(ClientError::UnexpectedOutcome("delete")),
        }
    }
}
