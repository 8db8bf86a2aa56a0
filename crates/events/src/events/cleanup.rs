use serde::{Deserialize, Serialize};

use super::FailureContext;

/// Progress of a batched delete or folder purge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CleanupEvent {
    /// Batched delete started
    Started { total: usize, batches: usize },

    /// One batch removed
    BatchCompleted {
        batch: usize,
        batches: usize,
        size: usize,
    },

    /// One batch failed as a whole
    BatchFailed {
        batch: usize,
        batches: usize,
        size: usize,
        failure: FailureContext,
    },

    /// Batched delete finished
    Completed {
        success: usize,
        failed: usize,
        duration_ms: u64,
    },

    /// Orphaned folder enumerated ahead of removal
    FolderListed { folder: String, objects: usize },

    /// Orphaned folder could not be enumerated
    FolderUnlisted {
        folder: String,
        failure: FailureContext,
    },
}

impl CleanupEvent {
    /// Human-readable status line
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Started { total, batches } => {
                format!("Deleting {total} files in {batches} batches...")
            }
            Self::BatchCompleted {
                batch,
                batches,
                size,
            } => format!("Deleted batch {batch}/{batches} ({size} files)"),
            Self::BatchFailed {
                batch,
                batches,
                failure,
                ..
            } => format!("Batch {batch}/{batches} failed: {}", failure.message),
            Self::Completed {
                success, failed, ..
            } => format!("Deleted {success} files, {failed} failed"),
            Self::FolderListed { folder, objects } => {
                format!("Folder {folder} holds {objects} objects")
            }
            Self::FolderUnlisted { folder, failure } => {
                format!("Could not list folder {folder}: {}", failure.message)
            }
        }
    }
}
