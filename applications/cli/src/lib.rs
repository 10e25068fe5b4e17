//! Postboard CLI Library
//!
//! Command-line front-end over the resilient users/posts client.
//!
//! This library exposes the command and configuration layers for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use commands::{Cli, Commands};
pub use config::AppConfig;
pub use error::{CliError, Result};
