//! Agent query request and response payloads.

use serde::{Deserialize, Serialize};

use super::ConversationHandle;

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of an agent query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationHandle>,
    pub stream: bool,
}

impl QueryRequest {
    /// Single user turn, optionally continuing a conversation.
    pub fn user(text: impl Into<String>, conversation_id: Option<ConversationHandle>) -> Self {
        Self {
            messages: vec![Message::user(text)],
            conversation_id,
            stream: false,
        }
    }
}

/// A retrieved passage backing the answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RetrievalContent {
    #[serde(default)]
    pub doc_name: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub content_text: Option<String>,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
}

/// Agent answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResponse {
    pub conversation_id: ConversationHandle,
    pub message: Message,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub retrieval_contents: Vec<RetrievalContent>,
}

impl QueryResponse {
    pub fn content(&self) -> &str {
        &self.message.content
    }
}
