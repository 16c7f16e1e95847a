//! MedAssist: healthcare research agent tooling.
//!
//! Provisions a datastore and agent on the Contextual AI platform, uploads
//! PDFs and waits for their ingestion, and runs single- and multi-turn
//! queries against the hosted agent.
//!
//! # Quick Start
//!
//! ```no_run
//! use medassist::prelude::*;
//!
//! # async fn example() -> medassist::error::Result<()> {
//! let config = MedAssistConfig::from_env()?;
//! let client = ContextualClient::new(&config)?;
//! let mut thread = ConversationThread::new(&client, AgentRef::new("agent-id"));
//! let first = thread.send("What screening guidelines are covered?").await?;
//! println!("{}", first.content());
//! let follow_up = thread.send("Go deeper on the first one.").await?;
//! println!("{}", follow_up.content());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod conversation;
pub mod error;
pub mod ingest;
pub mod prelude;
pub mod provision;
pub mod render;
pub mod types;
