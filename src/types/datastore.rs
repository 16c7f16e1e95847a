//! Datastore listing and creation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DatastoreRef;

/// A datastore entry as returned by the list call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Datastore {
    pub id: DatastoreRef,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListDatastoresResponse {
    #[serde(default)]
    pub datastores: Vec<Datastore>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateDatastoreRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedResource<T> {
    pub id: T,
}
