//! Structured logging integration for events
//!
//! Every event that reaches the CLI is also written to the tracing
//! subscriber with its metadata and domain fields, so `--debug` log files
//! carry the full progress history of a run.

use mediagc_events::{AppEvent, CleanupEvent, EventMessage, GeneralEvent, ScanEvent};
use tracing::{debug, error, info, warn};

/// Log an event using the tracing infrastructure with structured fields
pub fn log_event_with_tracing(message: &EventMessage) {
    let meta = &message.meta;
    let source = meta.source.as_str();
    let correlation = meta.correlation_id.as_deref().unwrap_or("-");

    match &message.event {
        AppEvent::General(event) => match event {
            GeneralEvent::Error { message, details } => {
                error!(source, event_id = %meta.event_id, correlation, details = ?details, "{message}");
            }
            GeneralEvent::Warning { message, context } => {
                warn!(source, event_id = %meta.event_id, correlation, context = ?context, "{message}");
            }
            GeneralEvent::OperationFailed { operation, failure } => {
                error!(
                    source,
                    event_id = %meta.event_id,
                    correlation,
                    operation = %operation,
                    code = ?failure.code,
                    retryable = failure.retryable,
                    "Operation failed: {}",
                    failure.message
                );
            }
            other => {
                debug!(source, event_id = %meta.event_id, correlation, "{}", other.message());
            }
        },

        AppEvent::Scan(event) => match event {
            ScanEvent::Completed {
                scanned_products,
                scanned_folders,
                orphaned_folders,
                orphaned_files,
                total_orphaned_size,
                duration_ms,
            } => {
                info!(
                    source,
                    event_id = %meta.event_id,
                    correlation,
                    scanned_products,
                    scanned_folders,
                    orphaned_folders,
                    orphaned_files,
                    total_orphaned_size,
                    duration_ms,
                    "Scan completed"
                );
            }
            ScanEvent::FolderSkipped { folder, failure } => {
                warn!(
                    source,
                    event_id = %meta.event_id,
                    correlation,
                    folder = %folder,
                    code = ?failure.code,
                    "Folder skipped: {}",
                    failure.message
                );
            }
            ScanEvent::Failed { failure } => {
                error!(
                    source,
                    event_id = %meta.event_id,
                    correlation,
                    code = ?failure.code,
                    retryable = failure.retryable,
                    "Scan failed: {}",
                    failure.message
                );
            }
            ScanEvent::FileOrphaned { path, size } => {
                debug!(source, event_id = %meta.event_id, correlation, path = %path, size, "Orphaned file");
            }
            other => {
                info!(source, event_id = %meta.event_id, correlation, "{}", other.message());
            }
        },

        AppEvent::Cleanup(event) => match event {
            CleanupEvent::BatchFailed {
                batch,
                batches,
                size,
                failure,
            } => {
                warn!(
                    source,
                    event_id = %meta.event_id,
                    correlation,
                    batch,
                    batches,
                    size,
                    code = ?failure.code,
                    "Batch failed: {}",
                    failure.message
                );
            }
            CleanupEvent::FolderUnlisted { folder, failure } => {
                warn!(
                    source,
                    event_id = %meta.event_id,
                    correlation,
                    folder = %folder,
                    code = ?failure.code,
                    "Folder unlisted: {}",
                    failure.message
                );
            }
            CleanupEvent::Completed {
                success,
                failed,
                duration_ms,
            } => {
                info!(
                    source,
                    event_id = %meta.event_id,
                    correlation,
                    success,
                    failed,
                    duration_ms,
                    "Delete completed"
                );
            }
            other => {
                debug!(source, event_id = %meta.event_id, correlation, "{}", other.message());
            }
        },
    }
}
