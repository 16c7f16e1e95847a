//! `medassist query`: interactive chat and the scripted demo.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::client::{AgentService, ContextualClient};
use crate::config::MedAssistConfig;
use crate::conversation::ConversationThread;
use crate::error::Result;
use crate::provision::prompts::DEMO_QUERIES;
use crate::render::{banner, describe_error, format_response, RenderOptions};
use crate::types::AgentRef;

use super::QueryArgs;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Quit,
    NewConversation,
    Ask(String),
}

impl ChatCommand {
    /// Parse a line; blank input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "quit" => Self::Quit,
            "new" => Self::NewConversation,
            _ => Self::Ask(trimmed.to_string()),
        })
    }
}

/// Counters for a chat or demo session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub answered: usize,
    pub failed: usize,
    pub resets: usize,
}

/// Handle `medassist query <AGENT_ID> [--demo]`.
pub async fn handle_query(config: &MedAssistConfig, args: QueryArgs) -> Result<()> {
    let client = ContextualClient::new(config)?;
    let agent = AgentRef::new(args.agent_id);
    let mut input = BufReader::new(tokio::io::stdin());

    if args.demo {
        run_demo(&client, agent, &mut input).await?;
    } else {
        run_interactive(&client, agent, &mut input).await?;
    }
    Ok(())
}

async fn ask(thread: &mut ConversationThread<'_>, query: &str, stats: &mut SessionStats) {
    match thread.send(query).await {
        Ok(response) => {
            stats.answered += 1;
            println!("{}", format_response(&response, RenderOptions::FULL));
        }
        Err(e) => {
            stats.failed += 1;
            println!("Error: {}", describe_error(&e));
        }
    }
}

/// Read one line; `None` on EOF.
async fn read_line<R: AsyncBufRead + Unpin>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).await?;
    Ok((read > 0).then_some(line))
}

/// Run the scripted demo queries in one conversation, pausing between them.
pub async fn run_demo<R: AsyncBufRead + Unpin>(
    service: &dyn AgentService,
    agent: AgentRef,
    input: &mut R,
) -> Result<SessionStats> {
    let mut thread = ConversationThread::new(service, agent);
    let mut stats = SessionStats::default();
    let total = DEMO_QUERIES.len();

    println!("{}\n", banner("  MEDASSIST - Healthcare Research Agent Demo"));

    for (i, demo) in DEMO_QUERIES.iter().enumerate() {
        println!(
            "\n{}",
            banner(&format!(
                "  Demo {}/{total}: {}\n  Query: {}",
                i + 1,
                demo.category,
                demo.query
            ))
        );
        ask(&mut thread, demo.query, &mut stats).await;

        if i + 1 < total {
            print!("Press Enter for next query...");
            std::io::stdout().flush()?;
            read_line(input).await?;
        }
    }

    println!("\n{}", banner("  Demo complete!"));
    Ok(stats)
}

/// Free-form chat: `quit` exits, `new` starts a new conversation.
pub async fn run_interactive<R: AsyncBufRead + Unpin>(
    service: &dyn AgentService,
    agent: AgentRef,
    input: &mut R,
) -> Result<SessionStats> {
    let mut thread = ConversationThread::new(service, agent);
    let mut stats = SessionStats::default();

    println!(
        "{}",
        banner(
            "  MEDASSIST - Interactive Healthcare Chat\n  Type 'quit' to exit, 'new' for new conversation"
        )
    );

    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;

        let Some(line) = read_line(input).await? else {
            println!("\nGoodbye!");
            break;
        };

        match ChatCommand::parse(&line) {
            None => continue,
            Some(ChatCommand::Quit) => {
                println!("Goodbye!");
                break;
            }
            Some(ChatCommand::NewConversation) => {
                thread.reset();
                stats.resets += 1;
                println!("Started new conversation.");
            }
            Some(ChatCommand::Ask(query)) => ask(&mut thread, &query, &mut stats).await,
        }
    }

    Ok(stats)
}
