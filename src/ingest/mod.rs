//! Document upload and ingestion monitoring.

pub mod monitor;
pub mod upload;

pub use monitor::{
    IngestionEvent, IngestionEventSink, IngestionMonitor, IngestionOutcome, IngestionReport,
    IngestionSettings,
};
pub use upload::{
    discover_pdfs, upload_all, LocalDocument, UploadEvent, UploadEventSink, UploadFailure,
    UploadSummary,
};
