#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for mediagc
//!
//! This crate provides the vocabulary shared by the catalog, the blob store
//! and the reconciler: product references, stored object listings, the
//! image file naming convention and the scan/delete reports.

pub mod image;
pub mod object;
pub mod product;
pub mod reports;

// Re-export commonly used types
pub use image::{base_name_from_url, ImageName, ImageVariant};
pub use object::{ObjectEntry, PLACEHOLDER_NAME};
pub use product::{ImageRef, ProductId, ProductImages};
pub use reports::{
    CleanReport, DeleteOutcome, FolderPurge, OrphanedFile, ScanResult, ORPHAN_REASON,
};

use serde::{Deserialize, Serialize};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    #[default]
    Tty,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "tty" => Ok(Self::Tty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Always,
    #[default]
    Auto,
    Never,
}

// Implement clap::ValueEnum for ColorChoice
impl clap::ValueEnum for ColorChoice {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Always, Self::Auto, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Always => clap::builder::PossibleValue::new("always"),
            Self::Auto => clap::builder::PossibleValue::new("auto"),
            Self::Never => clap::builder::PossibleValue::new("never"),
        })
    }
}
