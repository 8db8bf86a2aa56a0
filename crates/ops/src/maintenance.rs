//! Scan and cleanup operations

use crate::{CleanOptions, OpsCtx};
use mediagc_errors::Error;
use mediagc_events::{EventEmitter, FailureContext};
use mediagc_types::{CleanReport, ScanResult};
use std::time::Instant;

/// Report orphaned folders and files without modifying anything
///
/// # Errors
///
/// Returns an error if the catalog or the store root cannot be read.
pub async fn scan(ctx: &OpsCtx) -> Result<ScanResult, Error> {
    ctx.emit_operation_started("scan");

    match ctx.reconciler.scan().await {
        Ok(result) => {
            ctx.emit_operation_completed("scan", true);
            Ok(result)
        }
        Err(e) => {
            ctx.emit_operation_failed("scan", FailureContext::from_error(&e));
            Err(e)
        }
    }
}

/// Scan, then delete orphaned files and optionally orphaned folders
///
/// Batch failures are counted in the report rather than returned. A run
/// cancelled before every batch was attempted returns [`Error::Cancelled`].
///
/// # Errors
///
/// Returns an error if the scan fails or the run is cancelled.
pub async fn clean(ctx: &OpsCtx, options: CleanOptions) -> Result<CleanReport, Error> {
    let start = Instant::now();
    ctx.emit_operation_started("clean");

    let scan = match ctx.reconciler.scan().await {
        Ok(scan) => scan,
        Err(e) => {
            ctx.emit_operation_failed("clean", FailureContext::from_error(&e));
            return Err(e);
        }
    };

    let mut report = CleanReport {
        dry_run: options.dry_run,
        ..CleanReport::default()
    };

    if !options.dry_run {
        let paths = scan.orphaned_paths();
        let files = ctx.reconciler.delete_batch(&paths).await;
        if files.total() < paths.len() {
            tracing::warn!(
                success = files.success,
                failed = files.failed,
                unattempted = paths.len() - files.total(),
                "clean cancelled before all batches ran"
            );
            ctx.emit_operation_failed("clean", FailureContext::from_error(&Error::Cancelled));
            return Err(Error::Cancelled);
        }
        report.files = Some(files);

        if options.folders {
            match ctx.reconciler.purge_folders(&scan.orphaned_folders).await {
                Ok(purge) => report.folders = Some(purge),
                Err(e) => {
                    ctx.emit_operation_failed("clean", FailureContext::from_error(&e));
                    return Err(e);
                }
            }
        }
    }

    report.scan = scan;
    report.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    let failed = report.files.map_or(0, |f| f.failed)
        + report.folders.as_ref().map_or(0, |f| f.objects.failed);
    ctx.emit_operation_completed("clean", failed == 0);

    Ok(report)
}
