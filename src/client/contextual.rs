//! Contextual AI REST client.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::http::{
    bearer_headers, build_file_multipart, decode_response, expect_success, mime_for_filename,
    with_multipart_content_type,
};
use super::AgentService;
use crate::config::MedAssistConfig;
use crate::error::{MedAssistError, Result};
use crate::types::datastore::{CreateDatastoreRequest, CreatedResource, ListDatastoresResponse};
use crate::types::{
    AgentRef, CreateAgentRequest, Datastore, DatastoreRef, DocumentId, DocumentMetadata,
    QueryRequest, QueryResponse, UpdateAgentRequest,
};

/// HTTP client for the Contextual AI agent platform.
#[derive(Debug, Clone)]
pub struct ContextualClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ContextualClient {
    pub fn new(config: &MedAssistConfig) -> Result<Self> {
        Self::new_with_base_url(config.api_key(), config.base_url())
    }

    pub fn new_with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().pool_max_idle_per_host(4).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AgentService for ContextualClient {
    async fn list_datastores(&self) -> Result<Vec<Datastore>> {
        debug!("listing datastores");
        let response = self
            .http
            .get(self.url("/datastores"))
            .headers(bearer_headers(&self.api_key))
            .send()
            .await?;
        let list: ListDatastoresResponse = decode_response(response).await?;
        Ok(list.datastores)
    }

    async fn create_datastore(&self, name: &str) -> Result<DatastoreRef> {
        debug!(name, "creating datastore");
        let response = self
            .http
            .post(self.url("/datastores"))
            .headers(bearer_headers(&self.api_key))
            .json(&CreateDatastoreRequest { name })
            .send()
            .await?;
        let created: CreatedResource<DatastoreRef> = decode_response(response).await?;
        Ok(created.id)
    }

    async fn create_agent(&self, request: &CreateAgentRequest) -> Result<AgentRef> {
        debug!(name = %request.name, "creating agent");
        let response = self
            .http
            .post(self.url("/agents"))
            .headers(bearer_headers(&self.api_key))
            .json(request)
            .send()
            .await?;
        let created: CreatedResource<AgentRef> = decode_response(response).await?;
        Ok(created.id)
    }

    async fn update_agent(&self, agent: &AgentRef, update: &UpdateAgentRequest) -> Result<()> {
        if update.is_empty() {
            return Err(MedAssistError::InvalidArgument(
                "Agent update must change at least one field".to_string(),
            ));
        }
        debug!(agent = %agent, "updating agent");
        let response = self
            .http
            .put(self.url(&format!("/agents/{agent}")))
            .headers(bearer_headers(&self.api_key))
            .json(update)
            .send()
            .await?;
        expect_success(response).await
    }

    async fn ingest_document(
        &self,
        datastore: &DatastoreRef,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentId> {
        if bytes.is_empty() {
            return Err(MedAssistError::InvalidArgument(format!(
                "Refusing to upload empty file: {filename}"
            )));
        }
        debug!(datastore = %datastore, filename, size = bytes.len(), "ingesting document");

        let boundary = format!("medassist-{}", Uuid::new_v4().simple());
        let body = build_file_multipart(&boundary, filename, mime_for_filename(filename), &bytes);
        let headers = with_multipart_content_type(bearer_headers(&self.api_key), &boundary)?;

        let response = self
            .http
            .post(self.url(&format!("/datastores/{datastore}/documents")))
            .headers(headers)
            .body(body)
            .send()
            .await?;
        let created: CreatedResource<DocumentId> = decode_response(response).await?;
        Ok(created.id)
    }

    async fn document_metadata(
        &self,
        datastore: &DatastoreRef,
        document: &DocumentId,
    ) -> Result<DocumentMetadata> {
        let response = self
            .http
            .get(self.url(&format!(
                "/datastores/{datastore}/documents/{document}/metadata"
            )))
            .headers(bearer_headers(&self.api_key))
            .send()
            .await?;
        decode_response(response).await
    }

    async fn query_agent(&self, agent: &AgentRef, request: &QueryRequest) -> Result<QueryResponse> {
        debug!(
            agent = %agent,
            conversation = request.conversation_id.as_ref().map(|c| c.as_str()),
            "querying agent"
        );
        let response = self
            .http
            .post(self.url(&format!("/agents/{agent}/query")))
            .headers(bearer_headers(&self.api_key))
            .json(request)
            .send()
            .await?;
        decode_response(response).await
    }
}
