//! Report type definitions for scan and delete operations

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Reason attached to every orphaned file found inside a valid folder
pub const ORPHAN_REASON: &str = "Not referenced in product images";

/// A stored object no product image refers to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanedFile {
    /// Full object path, `{folder}/{file}`
    pub path: String,
    pub reason: String,
    /// Size in bytes (0 when the store did not report one)
    pub size: u64,
}

/// Result of reconciling the blob store against the catalog
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Number of product records considered
    pub scanned_products: usize,
    /// Number of root folders visited (placeholder excluded)
    pub scanned_folders: usize,
    /// Root folders whose name is not a product id
    pub orphaned_folders: Vec<String>,
    /// Files inside valid folders that no image references
    pub orphaned_files: Vec<OrphanedFile>,
    /// Sum of `orphaned_files[].size`
    pub total_orphaned_size: u64,
    /// Valid folders whose listing failed; their files were not analysed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_folders: Vec<String>,
}

impl ScanResult {
    /// Paths of the orphaned files, in discovery order
    #[must_use]
    pub fn orphaned_paths(&self) -> Vec<String> {
        self.orphaned_files.iter().map(|f| f.path.clone()).collect()
    }

    /// True when nothing needs deleting
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.orphaned_folders.is_empty() && self.orphaned_files.is_empty()
    }

    /// Record an orphaned file and account for its size
    pub fn push_orphaned_file(&mut self, path: String, size: u64) {
        self.total_orphaned_size += size;
        self.orphaned_files.push(OrphanedFile {
            path,
            reason: ORPHAN_REASON.to_string(),
            size,
        });
    }
}

/// Counts from a batched delete
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: usize,
    pub failed: usize,
}

impl DeleteOutcome {
    #[must_use]
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

impl AddAssign for DeleteOutcome {
    fn add_assign(&mut self, rhs: Self) {
        self.success += rhs.success;
        self.failed += rhs.failed;
    }
}

/// Result of recursively removing orphaned folders
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPurge {
    /// Folders whose every object was deleted
    pub removed: Vec<String>,
    /// Folders where at least one batch failed
    pub incomplete: Vec<String>,
    /// Folders whose contents could not be listed
    pub unlisted: Vec<String>,
    /// Object-level counts across all folders
    pub objects: DeleteOutcome,
}

/// Combined report of a `clean` run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanReport {
    pub scan: ScanResult,
    /// File-level deletions (absent for dry runs)
    pub files: Option<DeleteOutcome>,
    /// Folder purge (absent unless requested)
    pub folders: Option<FolderPurge>,
    pub dry_run: bool,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_result_json_keys() {
        let mut result = ScanResult {
            scanned_products: 2,
            scanned_folders: 3,
            orphaned_folders: vec!["gone".into()],
            ..ScanResult::default()
        };
        result.push_orphaned_file("P/999_xyz.png".into(), 42);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scannedProducts"], 2);
        assert_eq!(json["totalOrphanedSize"], 42);
        assert_eq!(json["orphanedFiles"][0]["reason"], ORPHAN_REASON);
        assert!(json.get("skippedFolders").is_none());
    }

    #[test]
    fn test_delete_outcome_accumulates() {
        let mut outcome = DeleteOutcome::default();
        outcome += DeleteOutcome {
            success: 10,
            failed: 0,
        };
        outcome += DeleteOutcome {
            success: 0,
            failed: 3,
        };
        assert_eq!(outcome.success, 10);
        assert_eq!(outcome.failed, 3);
        assert_eq!(outcome.total(), 13);
    }
}
