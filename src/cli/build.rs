//! `medassist build`: provision a datastore and agent, then smoke-test it.

use crate::client::{AgentService, ContextualClient};
use crate::config::MedAssistConfig;
use crate::conversation::ConversationThread;
use crate::error::Result;
use crate::provision::prompts::{MULTI_TURN_QUERIES, SMOKE_TEST_QUERIES};
use crate::provision::{self, DatastoreChoice};
use crate::render::{banner, describe_error, format_compact, rule, truncate_chars, RenderOptions};
use crate::types::{AgentRef, DatastoreRef, QueryRequest};

const TURN_PREVIEW_CHARS: usize = 400;

/// What the build run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub datastore: DatastoreRef,
    pub agent: AgentRef,
    pub prompt_configured: bool,
    pub smoke_test_failures: usize,
    pub multi_turn_completed: bool,
}

/// Handle `medassist build`.
pub async fn handle_build(config: &MedAssistConfig) -> Result<()> {
    let client = ContextualClient::new(config)?;
    println!("Contextual AI client initialized.\n");
    let summary = run_build(&client).await?;
    print_summary(&summary);
    Ok(())
}

/// Provision, configure and exercise the agent.
///
/// Datastore and agent setup failures are fatal; prompt configuration and
/// query failures are reported and skipped.
pub async fn run_build(service: &dyn AgentService) -> Result<BuildSummary> {
    println!("{}", banner("STEP 1: Setting up Datastore"));
    let setup = provision::ensure_datastore(service).await?;

    println!("\nAvailable datastores:");
    for ds in &setup.available {
        println!("  - {}: {}", ds.name, ds.id);
    }
    match &setup.choice {
        DatastoreChoice::Matched(ds) => {
            println!("\nFound healthcare-related datastore: {}", ds.name)
        }
        DatastoreChoice::FirstAvailable(ds) => println!("\nUsing datastore: {}", ds.name),
        DatastoreChoice::Created(id) => {
            println!("\nNo datastores found. Created datastore: {id}");
            println!("\nNOTE: You'll need to upload documents to this datastore.");
            println!("Upload PDFs of medical guidelines, research papers, or health info");
            println!("with `medassist upload`, or via the GUI at https://app.contextual.ai");
        }
    }
    let datastore = setup.choice.id().clone();
    println!("\nDatastore ID: {datastore}");

    println!("\n{}", banner("STEP 2: Creating Healthcare Research Agent"));
    let agent = provision::create_healthcare_agent(service, &datastore).await?;
    println!("\nAgent created! ID: {agent}");

    println!("\n{}", banner("STEP 3: Configuring Healthcare Prompts"));
    let prompt_configured = match provision::configure_prompt(service, &agent).await {
        Ok(()) => {
            println!("Healthcare prompts configured!");
            true
        }
        Err(e) => {
            println!("Could not configure prompts: {}", describe_error(&e));
            false
        }
    };

    println!("\n{}", banner("STEP 4: Testing the Healthcare Agent"));
    let smoke_test_failures = run_smoke_tests(service, &agent).await;

    println!("\n{}", banner("STEP 5: Multi-Turn Conversation Demo"));
    let multi_turn_completed = run_multi_turn(service, &agent).await;

    Ok(BuildSummary {
        datastore,
        agent,
        prompt_configured,
        smoke_test_failures,
        multi_turn_completed,
    })
}

/// Run each smoke-test query on its own conversation. Returns the failure count.
async fn run_smoke_tests(service: &dyn AgentService, agent: &AgentRef) -> usize {
    let mut failures = 0;
    let thin = rule('─', 50);

    for (i, query) in SMOKE_TEST_QUERIES.iter().enumerate() {
        println!("\n{thin}\nQuery {}: {query}\n{thin}", i + 1);

        match service
            .query_agent(agent, &QueryRequest::user(*query, None))
            .await
        {
            Ok(response) => print!("{}", format_compact(&response, RenderOptions::SMOKE_TEST)),
            Err(e) => {
                failures += 1;
                println!("Error querying agent: {}", describe_error(&e));
            }
        }
    }

    failures
}

async fn run_multi_turn(service: &dyn AgentService, agent: &AgentRef) -> bool {
    let mut thread = ConversationThread::new(service, agent.clone());
    let labels = ["Turn 1 Response", "Turn 2 (Follow-up) Response"];

    for (label, query) in labels.iter().zip(MULTI_TURN_QUERIES) {
        match thread.send(query).await {
            Ok(response) => println!(
                "\n{label}:\n{}",
                truncate_chars(response.content(), TURN_PREVIEW_CHARS)
            ),
            Err(e) => {
                println!("Error in multi-turn conversation: {}", describe_error(&e));
                return false;
            }
        }
    }

    true
}

fn print_summary(summary: &BuildSummary) {
    println!("\n{}", banner("HEALTHCARE AGENT READY!"));
    println!(
        "\nAgent Name:    Healthcare Research Assistant (MedAssist)\n\
         Agent ID:      {}\n\
         Datastore ID:  {}\n",
        summary.agent, summary.datastore
    );
    if !summary.prompt_configured {
        println!("WARNING: the system prompt was not applied; re-run or set it in the GUI.\n");
    }
    println!(
        "Next steps:\n  \
         1. Test in the GUI:  https://app.contextual.ai\n  \
         2. Upload healthcare documents:  AGENT_ID={} medassist upload\n  \
         3. Fine-tune prompts in Agent Composer\n\n\
         To query your agent:\n  \
         medassist query {}\n",
        summary.agent, summary.agent
    );
}
