//! Postboard Fallback Store
//!
//! In-memory copy of the users and posts collections, used when the remote
//! API cannot be reached.
//!
//! The store is an explicit object: construct one per process (or per test)
//! and hand clones of it to whoever needs access. Clones share the same
//! collections.
//!
//! # Example
//!
//! ```rust
//! use postboard_core::{NewUser, User};
//! use postboard_store::FallbackStore;
//!
//! # async fn example() -> Result<(), postboard_store::StoreError> {
//! let store = FallbackStore::new();
//!
//! let created: User = store
//!     .create(NewUser::new("A", "a", "a@x.com"))
//!     .await?;
//!
//! let fetched: User = store.get(created.id).await?;
//! assert_eq!(fetched, created);
//! # Ok(())
//! # }
//! ```

mod error;
mod seed;
mod store;

pub use error::{Result, StoreError};
pub use seed::{sample_posts, sample_users};
pub use store::{Collections, FallbackStore, Stored, Table};
