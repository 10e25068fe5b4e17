//! Postboard Client
//!
//! Resilient data-access layer for the users and posts REST API.
//!
//! # Features
//!
//! - **Availability probe**: a bounded `GET` on the collection endpoint before
//!   every operation decides between live and fallback mode
//! - **Live mode**: `GET`/`POST`/`PUT`/`DELETE` against the API, responses
//!   returned as decoded
//! - **Fallback mode**: the same operations against an in-memory store after an
//!   artificial delay
//! - **Sticky probing**: optionally reuse a probe result for an interval
//!
//! # Example
//!
//! ```ignore
//! use postboard_client::{Board, ClientConfig};
//! use postboard_core::NewPost;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let board = Board::new(ClientConfig::default())?;
//!
//!     println!("Running in {} mode", board.mode().await);
//!
//!     let post = board
//!         .posts()
//!         .create(NewPost::new(1, "Hello", "First post"))
//!         .await?;
//!     println!("Created post {}", post.id);
//!
//!     for entry in board.posts_with_authors().await? {
//!         println!("{} by {}", entry.post.title, entry.author);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod backend;
mod board;
mod client;
mod error;
mod operation;
mod remote;
mod types;

// Re-export main types
pub use backend::Backend;
pub use board::Board;
pub use client::ResourceClient;
pub use error::{ClientError, Result};
pub use operation::{Operation, Outcome};
pub use remote::RemoteApi;
pub use types::{
    ClientConfig, Mode, PostWithAuthor, ProbePolicy, DEFAULT_BASE_URL, DEFAULT_FALLBACK_LATENCY,
    DEFAULT_PROBE_TIMEOUT,
};
