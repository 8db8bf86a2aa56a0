//! Default values shared by the config sections and the CLI

/// Products fetched per catalog query
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Entries requested per folder listing call
pub const DEFAULT_LIST_PAGE_SIZE: usize = 1000;

/// Paths removed per bulk-remove call
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Folders listed concurrently during a scan
pub const DEFAULT_FOLDER_CONCURRENCY: usize = 1;

/// Delete batches in flight at once
pub const DEFAULT_DELETE_CONCURRENCY: usize = 1;

/// Directory name used under the platform config/data dirs
pub const APP_DIR: &str = "mediagc";

pub const CONFIG_FILE: &str = "config.toml";
