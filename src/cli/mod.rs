//! CLI entry point for MedAssist.

pub mod build;
pub mod query;
pub mod upload;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::ingest::IngestionSettings;

/// MedAssist healthcare research agent CLI
#[derive(Parser, Debug)]
#[command(
    name = "medassist",
    version,
    about = "Provision, load and query a hosted healthcare research agent"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up a datastore and agent, then run smoke-test queries
    Build,
    /// Chat with an agent, or run the scripted demo
    Query(QueryArgs),
    /// Upload local PDFs into a new datastore and bind an agent to it
    Upload(UploadArgs),
}

/// Arguments for `medassist query`.
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Agent to query
    pub agent_id: String,

    /// Run the scripted demo queries instead of interactive chat
    #[arg(long)]
    pub demo: bool,
}

/// Arguments for `medassist upload`.
#[derive(Parser, Debug)]
pub struct UploadArgs {
    /// Agent to rebind (defaults to $AGENT_ID, then the built-in agent)
    #[arg(long)]
    pub agent_id: Option<String>,

    /// Directory containing the PDFs (defaults to $MEDASSIST_DOCS_DIR or ./healthcare_docs)
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,

    /// Maximum seconds to wait for ingestion
    #[arg(long, default_value = "300", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_wait: u64,

    /// Seconds between status polls
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: u64,
}

impl UploadArgs {
    pub fn ingestion_settings(&self) -> IngestionSettings {
        IngestionSettings {
            max_wait: Duration::from_secs(self.max_wait),
            poll_interval: Duration::from_secs(self.poll_interval),
        }
    }
}
