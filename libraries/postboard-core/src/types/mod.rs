//! Domain types for Postboard

mod post;
mod user;

pub use post::{NewPost, Post, PostPatch};
pub use user::{NewUser, User, UserPatch};
