/// Command-line surface and its handlers
use crate::error::{CliError, Result};
use clap::{Parser, Subcommand};
use postboard_client::Board;
use postboard_core::{NewPost, NewUser, PostPatch, UserPatch};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(about = "Browse and edit users and posts, online or offline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "POSTBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether the API is reachable
    Status,

    /// User management
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Post management
    Posts {
        #[command(subcommand)]
        action: PostAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List all users
    List,

    /// Show one user
    Get { id: i64 },

    /// Create a new user
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,
    },

    /// Change fields of an existing user
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a user
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PostAction {
    /// List posts
    List {
        /// Only posts written by this user
        #[arg(long)]
        user_id: Option<i64>,

        /// Include each post's author name
        #[arg(long, conflicts_with = "user_id")]
        with_authors: bool,
    },

    /// Show one post
    Get { id: i64 },

    /// Create a new post
    Create {
        #[arg(long)]
        user_id: i64,

        #[arg(long)]
        title: String,

        #[arg(long)]
        body: String,
    },

    /// Change fields of an existing post
    Update {
        id: i64,

        #[arg(long)]
        user_id: Option<i64>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        body: Option<String>,
    },

    /// Delete a post
    Delete { id: i64 },
}

#[derive(Serialize)]
struct StatusReport<'a> {
    base_url: &'a str,
    mode: postboard_client::Mode,
}

#[derive(Serialize)]
struct Deleted<'a> {
    resource: &'a str,
    id: i64,
    deleted: bool,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(board: &Board, command: Commands) -> Result<()> {
    match command {
        Commands::Status => {
            let mode = board.mode().await;
            info!(%mode, "Probed API");
            print_json(&StatusReport {
                base_url: board.base_url(),
                mode,
            })
        }
        Commands::Users { action } => run_users(board, action).await,
        Commands::Posts { action } => run_posts(board, action).await,
    }
}

async fn run_users(board: &Board, action: UserAction) -> Result<()> {
    let users = board.users();

    match action {
        UserAction::List => print_json(&users.get_all().await?),
        UserAction::Get { id } => print_json(&users.get_by_id(id).await?),
        UserAction::Create {
            name,
            username,
            email,
        } => {
            let user = users.create(NewUser::new(name, username, email)).await?;
            info!(id = user.id, "Created user");
            print_json(&user)
        }
        UserAction::Update {
            id,
            name,
            username,
            email,
        } => {
            let patch = UserPatch {
                name,
                username,
                email,
            };
            if patch.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            print_json(&users.update(id, patch).await?)
        }
        UserAction::Delete { id } => {
            users.delete(id).await?;
            print_json(&Deleted {
                resource: "user",
                id,
                deleted: true,
            })
        }
    }
}

async fn run_posts(board: &Board, action: PostAction) -> Result<()> {
    let posts = board.posts();

    match action {
        PostAction::List {
            user_id: Some(user_id),
            ..
        } => print_json(&posts.get_by_user_id(user_id).await?),
        PostAction::List {
            with_authors: true,
            ..
        } => print_json(&board.posts_with_authors().await?),
        PostAction::List { .. } => print_json(&posts.get_all().await?),
        PostAction::Get { id } => print_json(&posts.get_by_id(id).await?),
        PostAction::Create {
            user_id,
            title,
            body,
        } => {
            let post = posts.create(NewPost::new(user_id, title, body)).await?;
            info!(id = post.id, user_id = post.user_id, "Created post");
            print_json(&post)
        }
        PostAction::Update {
            id,
            user_id,
            title,
            body,
        } => {
            let patch = PostPatch {
                user_id,
                title,
                body,
            };
            if patch.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            print_json(&posts.update(id, patch).await?)
        }
        PostAction::Delete { id } => {
            posts.delete(id).await?;
            print_json(&Deleted {
                resource: "post",
                id,
                deleted: true,
            })
        }
    }
}
