//! `medassist upload`: load local PDFs into a new datastore and rebind an agent.

use std::path::Path;
use std::sync::Arc;

use crate::client::{AgentService, ContextualClient};
use crate::config::MedAssistConfig;
use crate::error::Result;
use crate::ingest::{
    discover_pdfs, upload_all, IngestionEvent, IngestionMonitor, IngestionReport,
    IngestionSettings, UploadEvent, UploadEventSink, UploadSummary,
};
use crate::provision;
use crate::render::{banner, describe_error};
use crate::types::{AgentRef, DatastoreRef, IngestionStatus};

use super::UploadArgs;

/// Everything the upload run did.
#[derive(Debug)]
pub struct UploadRun {
    pub datastore: DatastoreRef,
    pub discovered: usize,
    pub summary: UploadSummary,
    /// `None` when nothing was uploaded and monitoring was skipped.
    pub ingestion: Option<IngestionReport>,
    pub agent_rebound: bool,
}

/// Handle `medassist upload`.
pub async fn handle_upload(config: &MedAssistConfig, args: UploadArgs) -> Result<()> {
    let client = ContextualClient::new(config)?;
    let agent = AgentRef::new(
        args.agent_id
            .clone()
            .unwrap_or_else(|| config.agent_id_or_fallback().to_string()),
    );
    let docs_dir = args
        .docs_dir
        .clone()
        .unwrap_or_else(|| config.docs_dir().clone());

    let run = run_upload(&client, &agent, &docs_dir, args.ingestion_settings()).await?;
    print_summary(&run, &agent);
    Ok(())
}

fn print_upload_event(event: &UploadEvent) {
    use std::io::Write;
    match event {
        UploadEvent::Started { document } => {
            print!(
                "  Uploading: {} ({:.1} MB)... ",
                document.name,
                document.size_mb()
            );
            let _ = std::io::stdout().flush();
        }
        UploadEvent::Uploaded { record } => println!("OK (doc_id: {})", record.document_id),
        UploadEvent::Failed { error, .. } => println!("FAILED: {error}"),
    }
}

fn print_ingestion_event(event: &IngestionEvent) {
    match event {
        IngestionEvent::Pending {
            document, status, ..
        } => match status {
            IngestionStatus::Processing(raw) => println!("  {}: {raw}", document.name),
            IngestionStatus::Unknown => println!("  {}: status unavailable", document.name),
            IngestionStatus::Completed => {}
        },
        IngestionEvent::Waiting { elapsed, .. } => {
            println!("  ... waiting ({}s elapsed)", elapsed.as_secs())
        }
        IngestionEvent::Completed { .. } => println!("\nAll documents ingested successfully!"),
        IngestionEvent::TimedOut { pending, .. } => {
            println!("\nTimeout waiting for ingestion. Some docs may still be processing:");
            for doc in pending {
                println!("  - {} ({})", doc.name, doc.document_id);
            }
            println!("You can check status later in the GUI at https://app.contextual.ai");
        }
    }
}

/// Discover, upload, wait for ingestion, then rebind the agent.
///
/// Only a missing documents directory or a failed datastore creation aborts
/// the run; upload, ingestion and rebind problems are reported and the run
/// carries on with whatever succeeded.
pub async fn run_upload(
    service: &dyn AgentService,
    agent: &AgentRef,
    docs_dir: &Path,
    settings: IngestionSettings,
) -> Result<UploadRun> {
    let documents = discover_pdfs(docs_dir).await?;

    println!("{}", banner("Creating Healthcare Knowledge Base datastore..."));
    let datastore = provision::create_knowledge_base(service).await?;
    println!("Datastore created: {datastore}\n");

    println!("Found {} PDF files to upload:\n", documents.len());
    let sink: UploadEventSink = Arc::new(print_upload_event);
    let summary = upload_all(service, &datastore, &documents, Some(sink)).await;
    println!(
        "\nUploaded {}/{} documents.",
        summary.uploaded.len(),
        documents.len()
    );

    let ingestion = if summary.uploaded.is_empty() {
        println!("Nothing to wait for.");
        None
    } else {
        println!(
            "\n{}",
            banner("Waiting for document ingestion to complete...")
        );
        let report = IngestionMonitor::new(service, &datastore)
            .with_settings(settings)
            .with_event_sink(Arc::new(print_ingestion_event))
            .wait_for(&summary.uploaded)
            .await;
        Some(report)
    };

    println!(
        "\n{}",
        banner("Updating agent to use Healthcare Knowledge Base...")
    );
    let agent_rebound = match provision::rebind_agent(service, agent, &datastore).await {
        Ok(()) => {
            println!("Agent updated! Now using datastore: {datastore}");
            true
        }
        Err(e) => {
            println!("Could not auto-update agent: {}", describe_error(&e));
            println!("Manually update the agent in the GUI to use datastore: {datastore}");
            false
        }
    };

    Ok(UploadRun {
        datastore,
        discovered: documents.len(),
        summary,
        ingestion,
        agent_rebound,
    })
}

fn print_summary(run: &UploadRun, agent: &AgentRef) {
    println!("\n{}", banner("HEALTHCARE DATASTORE READY!"));
    println!(
        "\nDatastore ID:  {}\nAgent ID:      {agent}\nDocuments:     {} uploaded\n",
        run.datastore,
        run.summary.uploaded.len()
    );
    println!("Documents included:");
    for doc in &run.summary.uploaded {
        println!("  - {}", doc.name);
    }
    if !run.summary.failed.is_empty() {
        println!("\nFailed uploads:");
        for failure in &run.summary.failed {
            println!("  - {}: {}", failure.name, describe_error(&failure.error));
        }
    }
    if let Some(report) = &run.ingestion {
        if !report.is_completed() {
            println!(
                "\n{} document(s) were still processing when the wait ended.",
                report.pending().len()
            );
        }
    }
    println!("\nNext: run the demo to see improved healthcare responses:\n  medassist query {agent} --demo\n");
}
