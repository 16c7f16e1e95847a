//! Document upload records and ingestion status.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::DocumentId;

/// A document accepted by the service, paired with its source filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUploadRecord {
    pub document_id: DocumentId,
    pub name: String,
}

impl DocumentUploadRecord {
    pub fn new(document_id: impl Into<DocumentId>, name: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            name: name.into(),
        }
    }
}

/// Raw processing status reported by the service for one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Retrying,
    Completed,
    Failed,
    Cancelled,
    #[strum(default)]
    Other(String),
}

impl DocumentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Retrying => "retrying",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DocumentStatus {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or(Self::Other(raw))
    }
}

impl From<DocumentStatus> for String {
    fn from(status: DocumentStatus) -> Self {
        status.to_string()
    }
}

/// Metadata returned for a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Outcome of one status check, as seen by the ingestion monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionStatus {
    /// Still being processed; carries the raw remote status.
    Processing(DocumentStatus),
    Completed,
    /// The status query failed; inconclusive.
    Unknown,
}

impl IngestionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<DocumentStatus> for IngestionStatus {
    fn from(status: DocumentStatus) -> Self {
        if status.is_completed() {
            Self::Completed
        } else {
            Self::Processing(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_parse_case_insensitively() {
        assert_eq!(
            DocumentStatus::from("COMPLETED".to_string()),
            DocumentStatus::Completed
        );
        assert_eq!(
            DocumentStatus::from("processing".to_string()),
            DocumentStatus::Processing
        );
    }

    #[test]
    fn unrecognized_status_is_kept_verbatim() {
        let status = DocumentStatus::from("queued_for_ocr".to_string());
        assert_eq!(status, DocumentStatus::Other("queued_for_ocr".into()));
        assert_eq!(status.to_string(), "queued_for_ocr");
        assert!(!IngestionStatus::from(status).is_completed());
    }

    #[test]
    fn only_completed_classifies_as_done() {
        assert!(IngestionStatus::from(DocumentStatus::Completed).is_completed());
        assert!(!IngestionStatus::from(DocumentStatus::Failed).is_completed());
        assert!(!IngestionStatus::Unknown.is_completed());
    }

    #[test]
    fn metadata_deserializes_from_service_payload() {
        let meta: DocumentMetadata = serde_json::from_value(serde_json::json!({
            "id": "doc-1",
            "name": "guidelines.pdf",
            "status": "retrying",
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(meta.status, DocumentStatus::Retrying);
        assert_eq!(meta.name.as_deref(), Some("guidelines.pdf"));
    }
}
