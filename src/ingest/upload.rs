//! Discover local PDFs and upload them into a datastore.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::client::AgentService;
use crate::error::{MedAssistError, Result};
use crate::types::{DatastoreRef, DocumentUploadRecord};

/// A file queued for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDocument {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

impl LocalDocument {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Find `*.pdf` files directly inside `dir`, sorted by file name.
///
/// Entries that cannot be inspected (dangling links, permission errors) are
/// logged and skipped.
pub async fn discover_pdfs(dir: &Path) -> Result<Vec<LocalDocument>> {
    let is_dir = tokio::fs::metadata(dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(MedAssistError::Configuration(format!(
            "Documents directory not found: {}",
            dir.display()
        )));
    }

    let mut documents = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "skipping unreadable entry");
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        documents.push(LocalDocument {
            path,
            name,
            size_bytes: metadata.len(),
        });
    }

    documents.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(documents)
}

/// Per-file upload progress.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    Started { document: LocalDocument },
    Uploaded { record: DocumentUploadRecord },
    Failed { name: String, error: String },
}

/// Callback receiving upload progress.
pub type UploadEventSink = Arc<dyn Fn(&UploadEvent) + Send + Sync>;

/// A file that could not be uploaded.
#[derive(Debug)]
pub struct UploadFailure {
    pub name: String,
    pub error: MedAssistError,
}

/// Result of a batch upload; partial success is normal.
#[derive(Debug, Default)]
pub struct UploadSummary {
    pub uploaded: Vec<DocumentUploadRecord>,
    pub failed: Vec<UploadFailure>,
}

/// Upload every document in order. A failing file is recorded and skipped.
pub async fn upload_all(
    service: &dyn AgentService,
    datastore: &DatastoreRef,
    documents: &[LocalDocument],
    sink: Option<UploadEventSink>,
) -> UploadSummary {
    let emit = |event: UploadEvent| {
        if let Some(sink) = &sink {
            sink(&event);
        }
    };
    let mut summary = UploadSummary::default();

    for document in documents {
        emit(UploadEvent::Started {
            document: document.clone(),
        });

        match upload_one(service, datastore, document).await {
            Ok(record) => {
                info!(name = %record.name, document = %record.document_id, "uploaded");
                emit(UploadEvent::Uploaded {
                    record: record.clone(),
                });
                summary.uploaded.push(record);
            }
            Err(error) => {
                warn!(name = %document.name, error = %error, "upload failed");
                emit(UploadEvent::Failed {
                    name: document.name.clone(),
                    error: error.to_string(),
                });
                summary.failed.push(UploadFailure {
                    name: document.name.clone(),
                    error,
                });
            }
        }
    }

    summary
}

async fn upload_one(
    service: &dyn AgentService,
    datastore: &DatastoreRef,
    document: &LocalDocument,
) -> Result<DocumentUploadRecord> {
    let bytes = tokio::fs::read(&document.path).await?;
    let id = service
        .ingest_document(datastore, &document.name, bytes)
        .await?;
    Ok(DocumentUploadRecord::new(id, document.name.clone()))
}
