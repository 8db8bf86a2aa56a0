//! Types for high-level operations

use serde::{Deserialize, Serialize};

/// What a `clean` run is allowed to touch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Scan and report, delete nothing
    pub dry_run: bool,
    /// Also purge orphaned folders recursively
    pub folders: bool,
}
