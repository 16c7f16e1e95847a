//! Shared test helpers and an in-memory agent service.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use medassist::client::AgentService;
use medassist::error::{MedAssistError, Result};
use medassist::types::*;

/// One scripted answer to a status query.
#[derive(Debug, Clone)]
pub enum StatusStep {
    Status(&'static str),
    Fail,
}

/// An agent service that answers from scripts and records every call.
#[derive(Default)]
pub struct MockService {
    pub datastores: Mutex<Vec<Datastore>>,
    pub fail_list: Mutex<bool>,
    pub created_datastores: Mutex<Vec<String>>,
    pub created_agents: Mutex<Vec<CreateAgentRequest>>,
    pub updates: Mutex<Vec<(AgentRef, UpdateAgentRequest)>>,
    pub fail_updates: Mutex<bool>,
    pub uploads: Mutex<Vec<(DatastoreRef, String, usize)>>,
    pub failing_uploads: Mutex<HashSet<String>>,
    /// Per-document status scripts; the last step repeats forever.
    pub status_scripts: Mutex<HashMap<DocumentId, VecDeque<StatusStep>>>,
    pub status_checks: Mutex<Vec<DocumentId>>,
    pub queries: Mutex<Vec<(AgentRef, QueryRequest)>>,
    /// Scripted query outcomes; `Err(())` fails that call. Empty queue answers
    /// with handle `conv-default`.
    pub query_script: Mutex<VecDeque<std::result::Result<&'static str, ()>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_datastores(self, list: &[(&str, &str)]) -> Self {
        *self.datastores.lock().unwrap() = list
            .iter()
            .map(|(id, name)| Datastore {
                id: DatastoreRef::new(*id),
                name: name.to_string(),
                created_at: None,
            })
            .collect();
        self
    }

    pub fn script_status(&self, document: &str, steps: &[StatusStep]) {
        self.status_scripts
            .lock()
            .unwrap()
            .insert(DocumentId::new(document), steps.iter().cloned().collect());
    }

    pub fn fail_upload_of(&self, filename: &str) {
        self.failing_uploads
            .lock()
            .unwrap()
            .insert(filename.to_string());
    }

    pub fn queue_answer(&self, conversation_id: &'static str) {
        self.query_script
            .lock()
            .unwrap()
            .push_back(Ok(conversation_id));
    }

    pub fn queue_failure(&self) {
        self.query_script.lock().unwrap().push_back(Err(()));
    }

    pub fn status_check_count(&self) -> usize {
        self.status_checks.lock().unwrap().len()
    }

    pub fn sent_handles(&self) -> Vec<Option<String>> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, req)| req.conversation_id.as_ref().map(|c| c.to_string()))
            .collect()
    }
}

pub fn record(id: &str, name: &str) -> DocumentUploadRecord {
    DocumentUploadRecord::new(id, name)
}

fn answer(conversation_id: &str, request: &QueryRequest) -> QueryResponse {
    let question = request
        .messages
        .last()
        .map(|m| m.content.clone())
        .unwrap_or_default();
    QueryResponse {
        conversation_id: ConversationHandle::new(conversation_id),
        message: Message {
            role: Role::Assistant,
            content: format!("Answer to: {question}"),
        },
        message_id: None,
        retrieval_contents: vec![RetrievalContent {
            doc_name: Some("guidelines.pdf".into()),
            page: Some(3),
            content_text: Some("Screening is recommended every 3 years.".into()),
            ..Default::default()
        }],
    }
}

#[async_trait]
impl AgentService for MockService {
    async fn list_datastores(&self) -> Result<Vec<Datastore>> {
        if *self.fail_list.lock().unwrap() {
            return Err(MedAssistError::api(500, "list failed"));
        }
        Ok(self.datastores.lock().unwrap().clone())
    }

    async fn create_datastore(&self, name: &str) -> Result<DatastoreRef> {
        let mut created = self.created_datastores.lock().unwrap();
        created.push(name.to_string());
        Ok(DatastoreRef::new(format!("ds-new-{}", created.len())))
    }

    async fn create_agent(&self, request: &CreateAgentRequest) -> Result<AgentRef> {
        let mut agents = self.created_agents.lock().unwrap();
        agents.push(request.clone());
        Ok(AgentRef::new(format!("agent-{}", agents.len())))
    }

    async fn update_agent(&self, agent: &AgentRef, update: &UpdateAgentRequest) -> Result<()> {
        self.updates
            .lock()
            .unwrap()
            .push((agent.clone(), update.clone()));
        if *self.fail_updates.lock().unwrap() {
            return Err(MedAssistError::NotFound(format!("agent {agent}")));
        }
        Ok(())
    }

    async fn ingest_document(
        &self,
        datastore: &DatastoreRef,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<DocumentId> {
        if self.failing_uploads.lock().unwrap().contains(filename) {
            return Err(MedAssistError::api(413, "file too large"));
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((datastore.clone(), filename.to_string(), bytes.len()));
        Ok(DocumentId::new(format!("doc-{}", uploads.len())))
    }

    async fn document_metadata(
        &self,
        _datastore: &DatastoreRef,
        document: &DocumentId,
    ) -> Result<DocumentMetadata> {
        self.status_checks.lock().unwrap().push(document.clone());
        let mut scripts = self.status_scripts.lock().unwrap();
        let step = match scripts.get_mut(document) {
            Some(steps) if steps.len() > 1 => steps.pop_front(),
            Some(steps) => steps.front().cloned(),
            None => Some(StatusStep::Status("completed")),
        };
        match step {
            Some(StatusStep::Status(raw)) => Ok(DocumentMetadata {
                status: DocumentStatus::from(raw.to_string()),
                name: None,
            }),
            Some(StatusStep::Fail) | None => {
                Err(MedAssistError::api(503, "metadata temporarily unavailable"))
            }
        }
    }

    async fn query_agent(&self, agent: &AgentRef, request: &QueryRequest) -> Result<QueryResponse> {
        self.queries
            .lock()
            .unwrap()
            .push((agent.clone(), request.clone()));
        match self.query_script.lock().unwrap().pop_front() {
            Some(Ok(conversation_id)) => Ok(answer(conversation_id, request)),
            Some(Err(())) => Err(MedAssistError::api(502, "upstream model error")),
            None => Ok(answer("conv-default", request)),
        }
    }
}
