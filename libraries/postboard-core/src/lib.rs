//! Postboard Core
//!
//! Shared domain types and traits for Postboard.
//!
//! This crate provides the building blocks used by the fallback store, the
//! resilient HTTP client, and the command-line front-end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Post`, their create payloads and partial updates
//! - **Core Traits**: `Resource`, the contract every collection entity follows
//!
//! # Example
//!
//! ```rust
//! use postboard_core::{Resource, User, NewUser, UserPatch};
//!
//! let mut user = User::from_new(
//!     1,
//!     NewUser::new("Leanne Graham", "Bret", "Sincere@april.biz"),
//! );
//!
//! user.apply_patch(UserPatch {
//!     email: Some("leanne@example.com".to_string()),
//!     ..Default::default()
//! });
//!
//! assert_eq!(user.username, "Bret");
//! assert_eq!(user.email, "leanne@example.com");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod resource;
pub mod types;

// Re-export commonly used types
pub use resource::{Resource, ResourceKind};
pub use types::{NewPost, NewUser, Post, PostPatch, User, UserPatch};
