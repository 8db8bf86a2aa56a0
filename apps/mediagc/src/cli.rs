//! Command line interface definition

use clap::{Parser, Subcommand};
use mediagc_types::ColorChoice;
use std::path::PathBuf;

/// mediagc - Find and remove product images no catalog record references
#[derive(Parser)]
#[command(name = "mediagc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find and remove product images no catalog record references")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging to the logs directory
    #[arg(long, global = true)]
    pub debug: bool,

    /// Color output control
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Product catalog database
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Directory holding one folder per product
    #[arg(long, global = true, value_name = "PATH")]
    pub storage_root: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Report orphaned folders and files without deleting anything
    Scan,

    /// Scan, then delete orphaned files
    Clean {
        /// Delete without asking; otherwise only the plan is printed
        #[arg(short, long)]
        yes: bool,

        /// Report what would be deleted and stop
        #[arg(long)]
        dry_run: bool,

        /// Also delete orphaned folders and everything in them
        #[arg(long)]
        folders: bool,
    },

    /// Create the catalog database and apply its schema
    InitDb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_flags() {
        let cli = Cli::parse_from([
            "mediagc",
            "--json",
            "clean",
            "--yes",
            "--folders",
            "--storage-root",
            "/srv/images",
        ]);
        assert!(cli.global.json);
        assert_eq!(cli.global.storage_root, Some(PathBuf::from("/srv/images")));
        match cli.command {
            Commands::Clean {
                yes,
                dry_run,
                folders,
            } => {
                assert!(yes);
                assert!(!dry_run);
                assert!(folders);
            }
            _ => panic!("expected clean"),
        }
    }

    #[test]
    fn test_parse_color() {
        let cli = Cli::parse_from(["mediagc", "scan", "--color", "never"]);
        assert_eq!(cli.global.color, Some(ColorChoice::Never));
        assert!(matches!(cli.command, Commands::Scan));
    }
}
