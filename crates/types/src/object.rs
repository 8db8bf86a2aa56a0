//! Blob store listing entries

use serde::{Deserialize, Serialize};

/// Marker object some blob stores create to keep an empty folder alive.
/// It is never a product folder and never an image.
pub const PLACEHOLDER_NAME: &str = ".emptyFolderPlaceholder";

/// One entry returned by a blob store listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Entry name relative to the listed prefix (no slashes)
    pub name: String,
    /// Reported size in bytes, when the store knows it
    pub size: Option<u64>,
    /// Whether the entry is a folder (a key prefix) rather than an object
    #[serde(default)]
    pub is_folder: bool,
}

impl ObjectEntry {
    #[must_use]
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
            is_folder: false,
        }
    }

    #[must_use]
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            is_folder: true,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }

    /// Size in bytes, counting unknown sizes as zero
    #[must_use]
    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}
