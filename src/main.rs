//! MedAssist CLI binary entry point.

use clap::Parser;
use medassist::cli::{Cli, Commands};
use medassist::config::MedAssistConfig;
use medassist::error::MedAssistError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medassist=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e {
            MedAssistError::Configuration(message) => eprintln!("ERROR: {message}"),
            other => eprintln!("Error: {}", medassist::render::describe_error(&other)),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> medassist::error::Result<()> {
    let config = MedAssistConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Build => medassist::cli::build::handle_build(&config).await,
        Commands::Query(args) => medassist::cli::query::handle_query(&config, args).await,
        Commands::Upload(args) => medassist::cli::upload::handle_upload(&config, args).await,
    }
}
