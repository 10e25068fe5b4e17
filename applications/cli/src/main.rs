/// Postboard - users and posts from the command line, online or offline
use clap::Parser;
use postboard_cli::{commands, AppConfig, Cli};
use postboard_client::Board;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "postboard_cli=info,postboard_client=info,postboard_store=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    info!(base_url = %config.api.base_url, "Starting Postboard");

    let board = Board::new(config.client_config())?;
    commands::run(&board, cli.command).await?;

    Ok(())
}
