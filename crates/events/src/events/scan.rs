use serde::{Deserialize, Serialize};

use super::FailureContext;

/// Progress of an orphan scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScanEvent {
    /// Scan started; catalog paging begins
    Started { page_size: usize },

    /// One page of product records fetched
    CatalogPage { offset: u64, fetched: usize },

    /// All product records loaded
    CatalogLoaded { products: usize },

    /// Root of the blob store listed
    RootListed { folders: usize },

    /// Root folder with no matching product id
    FolderOrphaned { folder: String },

    /// Valid folder whose listing failed; its files are not analysed
    FolderSkipped {
        folder: String,
        failure: FailureContext,
    },

    /// File inside a valid folder that no product image references
    FileOrphaned { path: String, size: u64 },

    /// Scan finished
    Completed {
        scanned_products: usize,
        scanned_folders: usize,
        orphaned_folders: usize,
        orphaned_files: usize,
        total_orphaned_size: u64,
        duration_ms: u64,
    },

    /// Scan aborted by an unrecoverable error
    Failed { failure: FailureContext },
}

impl ScanEvent {
    /// Human-readable status line
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Started { .. } => "Fetching products...".to_string(),
            Self::CatalogPage { offset, fetched } => {
                format!("Fetched {fetched} products from offset {offset}")
            }
            Self::CatalogLoaded { products } => format!("Found {products} products"),
            Self::RootListed { folders } => format!("Scanning {folders} storage folders..."),
            Self::FolderOrphaned { folder } => format!("Orphaned folder: {folder}"),
            Self::FolderSkipped { folder, failure } => {
                format!("Skipped folder {folder}: {}", failure.message)
            }
            Self::FileOrphaned { path, .. } => format!("Orphaned file: {path}"),
            Self::Completed {
                orphaned_folders,
                orphaned_files,
                total_orphaned_size,
                ..
            } => format!(
                "Scan complete: {orphaned_folders} orphaned folders, {orphaned_files} orphaned files ({total_orphaned_size} bytes)"
            ),
            Self::Failed { failure } => format!("Scan failed: {}", failure.message),
        }
    }
}
