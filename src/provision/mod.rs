//! Datastore selection and agent setup.

pub mod prompts;

use tracing::info;

use crate::client::AgentService;
use crate::error::Result;
use crate::types::{AgentRef, CreateAgentRequest, Datastore, DatastoreRef, UpdateAgentRequest};

use prompts::{AGENT_DESCRIPTION, AGENT_NAME, DATASTORE_NAME, HEALTHCARE_KEYWORDS, SYSTEM_PROMPT};

/// Why a datastore was chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum DatastoreChoice {
    /// Name matched a healthcare keyword.
    Matched(Datastore),
    /// Nothing matched; the first listed datastore was used.
    FirstAvailable(Datastore),
    /// No datastores existed; a new empty one was created.
    Created(DatastoreRef),
}

impl DatastoreChoice {
    pub fn id(&self) -> &DatastoreRef {
        match self {
            Self::Matched(ds) | Self::FirstAvailable(ds) => &ds.id,
            Self::Created(id) => id,
        }
    }
}

/// Datastores seen during setup and the one picked.
#[derive(Debug, Clone, PartialEq)]
pub struct DatastoreSetup {
    pub available: Vec<Datastore>,
    pub choice: DatastoreChoice,
}

/// Pick the first datastore whose name looks healthcare-related, else the
/// first listed. Returns `None` only for an empty list.
pub fn select_datastore(datastores: &[Datastore]) -> Option<DatastoreChoice> {
    let matched = datastores.iter().find(|ds| {
        let name = ds.name.to_lowercase();
        HEALTHCARE_KEYWORDS.iter().any(|kw| name.contains(kw))
    });

    match matched {
        Some(ds) => Some(DatastoreChoice::Matched(ds.clone())),
        None => datastores
            .first()
            .cloned()
            .map(DatastoreChoice::FirstAvailable),
    }
}

/// List datastores and select one, creating the knowledge base if none exist.
pub async fn ensure_datastore(service: &dyn AgentService) -> Result<DatastoreSetup> {
    let available = service.list_datastores().await?;

    let choice = match select_datastore(&available) {
        Some(choice) => choice,
        None => {
            info!(name = DATASTORE_NAME, "no datastores found; creating one");
            DatastoreChoice::Created(service.create_datastore(DATASTORE_NAME).await?)
        }
    };

    info!(datastore = %choice.id(), "datastore selected");
    Ok(DatastoreSetup { available, choice })
}

/// Create a fresh, empty knowledge-base datastore.
pub async fn create_knowledge_base(service: &dyn AgentService) -> Result<DatastoreRef> {
    let id = service.create_datastore(DATASTORE_NAME).await?;
    info!(datastore = %id, "datastore created");
    Ok(id)
}

/// Create the research assistant agent bound to one datastore.
pub async fn create_healthcare_agent(
    service: &dyn AgentService,
    datastore: &DatastoreRef,
) -> Result<AgentRef> {
    let request = CreateAgentRequest {
        name: AGENT_NAME.to_string(),
        description: AGENT_DESCRIPTION.to_string(),
        datastore_ids: vec![datastore.clone()],
    };
    let agent = service.create_agent(&request).await?;
    info!(agent = %agent, datastore = %datastore, "agent created");
    Ok(agent)
}

/// Install the MedAssist system prompt on an agent.
pub async fn configure_prompt(service: &dyn AgentService, agent: &AgentRef) -> Result<()> {
    service
        .update_agent(agent, &UpdateAgentRequest::system_prompt(SYSTEM_PROMPT))
        .await?;
    info!(agent = %agent, "system prompt configured");
    Ok(())
}

/// Point an agent at a different datastore.
pub async fn rebind_agent(
    service: &dyn AgentService,
    agent: &AgentRef,
    datastore: &DatastoreRef,
) -> Result<()> {
    service
        .update_agent(agent, &UpdateAgentRequest::datastores(vec![datastore.clone()]))
        .await?;
    info!(agent = %agent, datastore = %datastore, "agent rebound");
    Ok(())
}
