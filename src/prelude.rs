//! Convenience re-exports for common use.

pub use crate::client::{AgentService, ContextualClient};
pub use crate::config::MedAssistConfig;
pub use crate::conversation::ConversationThread;
pub use crate::error::{MedAssistError, Result};
pub use crate::ingest::{IngestionMonitor, IngestionOutcome, IngestionReport, IngestionSettings};
pub use crate::types::{
    AgentRef, ConversationHandle, DatastoreRef, DocumentId, DocumentUploadRecord, QueryResponse,
};
