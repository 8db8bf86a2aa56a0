#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! High-level operations orchestration for mediagc
//!
//! This crate sits between the CLI and the catalog/store crates. The
//! [`Reconciler`] holds the scan and delete logic; [`scan`] and [`clean`]
//! wrap it for a fully wired [`OpsCtx`].

mod context;
mod maintenance;
mod reconciler;
mod types;

pub use context::{OpsContextBuilder, OpsCtx};
pub use maintenance::{clean, scan};
pub use reconciler::{Reconciler, ReconcilerSettings};
pub use types::CleanOptions;

use mediagc_errors::{Error, OpsError};
use mediagc_types::{CleanReport, DeleteOutcome, ScanResult};

/// Operation result that can be serialized for CLI output
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationResult {
    /// Scan findings
    Scan(ScanResult),
    /// Clean run report
    Clean(CleanReport),
    /// Generic success message
    Success(String),
}

impl OperationResult {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    /// Error for a clean run where some deletions failed
    ///
    /// Orphaned files that no batch accounted for count as failed.
    #[must_use]
    pub fn partial_failure(&self) -> Option<OpsError> {
        let OperationResult::Clean(report) = self else {
            return None;
        };
        let (files, expected) = match report.files {
            Some(files) => (files, report.scan.orphaned_files.len().max(files.total())),
            None => (DeleteOutcome::default(), 0),
        };
        let folders = report
            .folders
            .as_ref()
            .map(|f| f.objects)
            .unwrap_or_default();
        let failed = expected - files.success + folders.failed;
        (failed > 0).then(|| OpsError::PartialDelete {
            failed,
            total: expected + folders.total(),
        })
    }
}
