//! Poll uploaded documents until they finish ingesting or a deadline passes.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::client::AgentService;
use crate::config::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL};
use crate::types::{DatastoreRef, DocumentUploadRecord, IngestionStatus};

/// Deadline and cadence for an ingestion wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionSettings {
    /// Total wall-clock budget before reporting a timeout.
    pub max_wait: Duration,
    /// Pause between poll cycles.
    pub poll_interval: Duration,
}

impl Default for IngestionSettings {
    fn default() -> Self {
        Self {
            max_wait: DEFAULT_MAX_WAIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Progress emitted while waiting.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestionEvent {
    /// A document is not done yet after this cycle's check.
    Pending {
        cycle: u32,
        document: DocumentUploadRecord,
        status: IngestionStatus,
    },
    /// End of a cycle with work remaining; the monitor is about to sleep.
    Waiting {
        cycle: u32,
        elapsed: Duration,
        pending: usize,
    },
    Completed {
        cycles: u32,
        elapsed: Duration,
    },
    TimedOut {
        elapsed: Duration,
        pending: Vec<DocumentUploadRecord>,
    },
}

/// Callback receiving ingestion progress.
pub type IngestionEventSink = Arc<dyn Fn(&IngestionEvent) + Send + Sync>;

/// How an ingestion wait ended.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestionOutcome {
    Completed,
    /// Deadline passed; these documents may still finish remotely.
    TimedOut { pending: Vec<DocumentUploadRecord> },
}

/// Summary of one ingestion wait.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionReport {
    pub outcome: IngestionOutcome,
    pub cycles: u32,
    pub status_checks: usize,
    pub elapsed: Duration,
}

impl IngestionReport {
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, IngestionOutcome::Completed)
    }

    /// Documents still pending at the deadline (empty on success).
    pub fn pending(&self) -> &[DocumentUploadRecord] {
        match &self.outcome {
            IngestionOutcome::Completed => &[],
            IngestionOutcome::TimedOut { pending } => pending,
        }
    }
}

/// Waits for a batch of uploaded documents to finish remote processing.
///
/// Status-query failures are inconclusive: the document stays pending and
/// is checked again next cycle. A timeout is reported as an outcome, never
/// as an error.
pub struct IngestionMonitor<'a> {
    service: &'a dyn AgentService,
    datastore: &'a DatastoreRef,
    settings: IngestionSettings,
    event_sink: Option<IngestionEventSink>,
}

impl<'a> IngestionMonitor<'a> {
    pub fn new(service: &'a dyn AgentService, datastore: &'a DatastoreRef) -> Self {
        Self {
            service,
            datastore,
            settings: IngestionSettings::default(),
            event_sink: None,
        }
    }

    pub fn with_settings(mut self, settings: IngestionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_event_sink(mut self, sink: IngestionEventSink) -> Self {
        self.event_sink = Some(sink);
        self
    }

    fn emit(&self, event: IngestionEvent) {
        if let Some(sink) = &self.event_sink {
            sink(&event);
        }
    }

    async fn check(&self, record: &DocumentUploadRecord) -> IngestionStatus {
        match self
            .service
            .document_metadata(self.datastore, &record.document_id)
            .await
        {
            Ok(metadata) => IngestionStatus::from(metadata.status),
            Err(e) => {
                warn!(
                    document = %record.document_id,
                    name = %record.name,
                    error = %e,
                    "status check failed; treating as still pending"
                );
                IngestionStatus::Unknown
            }
        }
    }

    /// Poll until every record is completed or `max_wait` has elapsed.
    pub async fn wait_for(&self, records: &[DocumentUploadRecord]) -> IngestionReport {
        let start = Instant::now();
        let mut pending: Vec<&DocumentUploadRecord> = records.iter().collect();
        let mut cycles = 0u32;
        let mut status_checks = 0usize;

        if pending.is_empty() {
            debug!("no documents to monitor");
            return IngestionReport {
                outcome: IngestionOutcome::Completed,
                cycles,
                status_checks,
                elapsed: Duration::ZERO,
            };
        }

        info!(
            datastore = %self.datastore,
            documents = pending.len(),
            max_wait_secs = self.settings.max_wait.as_secs(),
            "waiting for ingestion"
        );

        while start.elapsed() < self.settings.max_wait {
            cycles += 1;
            let mut still_pending = Vec::with_capacity(pending.len());

            for record in pending {
                status_checks += 1;
                let status = self.check(record).await;
                if status.is_completed() {
                    debug!(document = %record.document_id, "ingestion completed");
                    continue;
                }
                self.emit(IngestionEvent::Pending {
                    cycle: cycles,
                    document: record.clone(),
                    status,
                });
                still_pending.push(record);
            }
            pending = still_pending;

            let elapsed = start.elapsed();
            if pending.is_empty() {
                info!(cycles, elapsed_secs = elapsed.as_secs(), "all documents ingested");
                self.emit(IngestionEvent::Completed { cycles, elapsed });
                return IngestionReport {
                    outcome: IngestionOutcome::Completed,
                    cycles,
                    status_checks,
                    elapsed,
                };
            }

            self.emit(IngestionEvent::Waiting {
                cycle: cycles,
                elapsed,
                pending: pending.len(),
            });
            tokio::time::sleep(self.settings.poll_interval).await;
        }

        let elapsed = start.elapsed();
        let pending: Vec<DocumentUploadRecord> = pending.into_iter().cloned().collect();
        warn!(
            pending = pending.len(),
            elapsed_secs = elapsed.as_secs(),
            "timed out waiting for ingestion"
        );
        self.emit(IngestionEvent::TimedOut {
            elapsed,
            pending: pending.clone(),
        });
        IngestionReport {
            outcome: IngestionOutcome::TimedOut { pending },
            cycles,
            status_checks,
            elapsed,
        }
    }
}
