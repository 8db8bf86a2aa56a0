#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for mediagc
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/mediagc/config.toml)
//! - Environment variables
//! - CLI flags

pub mod constants;

use constants::{
    APP_DIR, CONFIG_FILE, DEFAULT_BATCH_SIZE, DEFAULT_DELETE_CONCURRENCY,
    DEFAULT_FOLDER_CONCURRENCY, DEFAULT_LIST_PAGE_SIZE, DEFAULT_PAGE_SIZE,
};
use mediagc_errors::{ConfigError, Error};
use mediagc_types::{ColorChoice, OutputFormat, PLACEHOLDER_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub cleanup: CleanupConfig,

    #[serde(default)]
    pub paths: PathConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub default_output: OutputFormat,
    #[serde(default)]
    pub color: ColorChoice,
}

/// Product catalog (data store) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub database_path: Option<PathBuf>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Blob store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding one folder per product
    pub root: Option<PathBuf>,
    #[serde(default = "default_list_page_size")]
    pub list_page_size: usize,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_folder_concurrency")]
    pub folder_concurrency: usize,
}

/// Delete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_delete_concurrency")]
    pub delete_concurrency: usize,
}

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    pub logs_dir: Option<PathBuf>,
}

// Default implementations

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: None,
            list_page_size: DEFAULT_LIST_PAGE_SIZE,
            placeholder: default_placeholder(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            folder_concurrency: DEFAULT_FOLDER_CONCURRENCY,
        }
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            delete_concurrency: DEFAULT_DELETE_CONCURRENCY,
        }
    }
}

// Default value functions for serde
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_list_page_size() -> usize {
    DEFAULT_LIST_PAGE_SIZE
}

fn default_placeholder() -> String {
    PLACEHOLDER_NAME.to_string()
}

fn default_folder_concurrency() -> usize {
    DEFAULT_FOLDER_CONCURRENCY
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_delete_concurrency() -> usize {
    DEFAULT_DELETE_CONCURRENCY
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config file");
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // MEDIAGC_OUTPUT
        if let Ok(output) = std::env::var("MEDIAGC_OUTPUT") {
            self.general.default_output =
                output.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "MEDIAGC_OUTPUT".to_string(),
                    value: output,
                })?;
        }

        // MEDIAGC_COLOR
        if let Ok(color) = std::env::var("MEDIAGC_COLOR") {
            self.general.color = match color.as_str() {
                "always" => ColorChoice::Always,
                "auto" => ColorChoice::Auto,
                "never" => ColorChoice::Never,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "MEDIAGC_COLOR".to_string(),
                        value: color,
                    }
                    .into())
                }
            };
        }

        if let Ok(database) = std::env::var("MEDIAGC_DATABASE") {
            self.catalog.database_path = Some(PathBuf::from(database));
        }

        if let Ok(root) = std::env::var("MEDIAGC_STORAGE_ROOT") {
            self.storage.root = Some(PathBuf::from(root));
        }

        self.catalog.page_size = env_usize("MEDIAGC_PAGE_SIZE", self.catalog.page_size)?;
        self.cleanup.batch_size = env_usize("MEDIAGC_BATCH_SIZE", self.cleanup.batch_size)?;

        Ok(())
    }

    /// Reject settings the reconciler cannot work with
    ///
    /// # Errors
    ///
    /// Returns an error naming the first zero-valued size or concurrency.
    pub fn validate(&self) -> Result<(), Error> {
        let checks = [
            ("catalog.page_size", self.catalog.page_size),
            ("storage.list_page_size", self.storage.list_page_size),
            ("scan.folder_concurrency", self.scan.folder_concurrency),
            ("cleanup.batch_size", self.cleanup.batch_size),
            ("cleanup.delete_concurrency", self.cleanup.delete_concurrency),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Get the catalog database path
    ///
    /// # Errors
    ///
    /// Returns an error if no database path was configured.
    pub fn database_path(&self) -> Result<PathBuf, Error> {
        self.catalog.database_path.clone().ok_or_else(|| {
            ConfigError::MissingField {
                field: "catalog.database_path".to_string(),
            }
            .into()
        })
    }

    /// Get the blob store root
    ///
    /// # Errors
    ///
    /// Returns an error if no storage root was configured.
    pub fn storage_root(&self) -> Result<PathBuf, Error> {
        self.storage.root.clone().ok_or_else(|| {
            ConfigError::MissingField {
                field: "storage.root".to_string(),
            }
            .into()
        })
    }

    /// Get the logs directory (with default)
    #[must_use]
    pub fn logs_dir(&self) -> PathBuf {
        self.paths.logs_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("logs")
        })
    }
}

fn env_usize(var: &str, current: usize) -> Result<usize, Error> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| {
            ConfigError::InvalidValue {
                field: var.to_string(),
                value,
            }
            .into()
        }),
        Err(_) => Ok(current),
    }
}
