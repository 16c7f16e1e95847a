//! Agent creation and update payloads.

use serde::{Deserialize, Serialize};

use super::DatastoreRef;

/// Parameters for creating a new agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAgentRequest {
    pub name: String,
    pub description: String,
    pub datastore_ids: Vec<DatastoreRef>,
}

/// Partial agent update. Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateAgentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datastore_ids: Option<Vec<DatastoreRef>>,
}

impl UpdateAgentRequest {
    pub fn system_prompt(prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    pub fn datastores(ids: Vec<DatastoreRef>) -> Self {
        Self {
            datastore_ids: Some(ids),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.system_prompt.is_none() && self.datastore_ids.is_none()
    }
}
