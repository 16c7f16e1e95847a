//! Multi-turn conversation threading.

use tracing::{debug, info};

use crate::client::AgentService;
use crate::error::{MedAssistError, Result};
use crate::types::{AgentRef, ConversationHandle, QueryRequest, QueryResponse};

/// Threads the service's conversation handle through sequential queries.
///
/// The first `send` (and the first after `reset`) carries no handle. Every
/// successful response replaces the handle; a failed call leaves it as is.
pub struct ConversationThread<'a> {
    service: &'a dyn AgentService,
    agent: AgentRef,
    current: Option<ConversationHandle>,
}

impl<'a> ConversationThread<'a> {
    pub fn new(service: &'a dyn AgentService, agent: AgentRef) -> Self {
        Self {
            service,
            agent,
            current: None,
        }
    }

    /// Handle that the next `send` will carry.
    pub fn handle(&self) -> Option<&ConversationHandle> {
        self.current.as_ref()
    }

    /// Send one user turn.
    pub async fn send(&mut self, text: &str) -> Result<QueryResponse> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MedAssistError::InvalidArgument(
                "Query text cannot be empty".to_string(),
            ));
        }

        let request = QueryRequest::user(text, self.current.clone());
        let response = self.service.query_agent(&self.agent, &request).await?;

        if self.current.as_ref() != Some(&response.conversation_id) {
            debug!(conversation = %response.conversation_id, "conversation handle updated");
        }
        self.current = Some(response.conversation_id.clone());
        Ok(response)
    }

    /// Forget the handle; the next `send` starts a new remote conversation.
    pub fn reset(&mut self) {
        if let Some(previous) = self.current.take() {
            info!(conversation = %previous, "conversation reset");
        }
    }
}
