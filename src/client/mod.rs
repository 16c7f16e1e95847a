//! Agent service trait and its HTTP implementation.

pub mod contextual;
pub mod http;

pub use contextual::ContextualClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    AgentRef, CreateAgentRequest, Datastore, DatastoreRef, DocumentId, DocumentMetadata,
    QueryRequest, QueryResponse, UpdateAgentRequest,
};

/// Remote agent-and-datastore service.
///
/// Every call is a single request/response round trip; no call retries on
/// its own. Callers decide whether a failure is fatal or inconclusive.
#[async_trait]
pub trait AgentService: Send + Sync {
    async fn list_datastores(&self) -> Result<Vec<Datastore>>;

    async fn create_datastore(&self, name: &str) -> Result<DatastoreRef>;

    async fn create_agent(&self, request: &CreateAgentRequest) -> Result<AgentRef>;

    /// Idempotent partial update of an existing agent.
    async fn update_agent(&self, agent: &AgentRef, update: &UpdateAgentRequest) -> Result<()>;

    /// Upload one file into a datastore. Ingestion continues asynchronously.
    async fn ingest_document(
        &self,
        datastore: &DatastoreRef,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentId>;

    async fn document_metadata(
        &self,
        datastore: &DatastoreRef,
        document: &DocumentId,
    ) -> Result<DocumentMetadata>;

    async fn query_agent(&self, agent: &AgentRef, request: &QueryRequest) -> Result<QueryResponse>;
}
