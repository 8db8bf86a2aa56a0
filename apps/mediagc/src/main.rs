//! mediagc - Find and remove product images no catalog record references
//!
//! This is the CLI application. It wires the catalog and blob store into an
//! operations context and renders the result of the requested command.

mod cli;
mod display;
mod error;
mod events;
mod logging;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use mediagc_catalog::SqliteCatalog;
use mediagc_config::Config;
use mediagc_events::EventReceiver;
use mediagc_ops::{CleanOptions, OperationResult, OpsContextBuilder, OpsCtx};
use mediagc_store::LocalBlobStore;
use mediagc_types::{ColorChoice, OutputFormat};
use std::path::Path;
use std::process;
use std::sync::{Arc, Mutex};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    // Configuration decides where debug logs go, so it loads before tracing
    let config = match load_config(&cli.global).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    init_tracing(json_mode, cli.global.debug, &config.logs_dir());

    // Run the application and handle errors
    if let Err(e) = run(cli, config).await {
        error!("Application error: {}", e);
        if !json_mode {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Load configuration with proper precedence
async fn load_config(global: &GlobalArgs) -> Result<Config, CliError> {
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(global.config.as_deref()).await?;

    // 2. Merge environment variables
    config.merge_env()?;

    // 3. Apply CLI flags (highest precedence)
    apply_cli_config(&mut config, global);

    config.validate()?;
    Ok(config)
}

/// Main application logic
async fn run(cli: Cli, config: Config) -> Result<(), CliError> {
    info!("Starting mediagc v{}", env!("CARGO_PKG_VERSION"));

    let json_output =
        cli.global.json || config.general.default_output == OutputFormat::Json;
    let renderer = OutputRenderer::new(json_output, config.general.color);

    if matches!(cli.command, Commands::InitDb) {
        let db_path = config.database_path()?;
        let catalog = SqliteCatalog::init(&db_path).await?;
        let products = catalog.count().await?;
        let result = OperationResult::Success(format!(
            "Catalog ready at {} ({products} products)",
            db_path.display()
        ));
        renderer.render_result(&result)?;
        return Ok(());
    }

    // Create event channel
    let (event_sender, event_receiver) = mediagc_events::channel();
    let cancel = CancellationToken::new();

    // Build operations context
    let ops_ctx = build_ops_context(&config, event_sender, cancel.clone()).await?;

    // Create event handler
    let colors_enabled = match config.general.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => console::Term::stderr().features().colors_supported(),
    };
    let mut event_handler = EventHandler::new(colors_enabled, cli.global.debug, json_output);

    // Execute command with event handling
    let result = execute_command_with_events(
        cli.command,
        ops_ctx,
        event_receiver,
        &mut event_handler,
        cancel,
    )
    .await?;

    // Render final result
    renderer.render_result(&result)?;

    if let Some(partial) = result.partial_failure() {
        return Err(partial.into());
    }

    info!("Command completed successfully");
    Ok(())
}

/// Execute command with concurrent event handling
async fn execute_command_with_events(
    command: Commands,
    ops_ctx: OpsCtx,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
    cancel: CancellationToken,
) -> Result<OperationResult, CliError> {
    let mut command_future = Box::pin(execute_command(command, ops_ctx));
    let mut interrupted = false;

    // Handle events concurrently with command execution
    loop {
        select! {
            // Command completed
            result = &mut command_future => {
                // Drain any remaining events
                while let Ok(event) = event_receiver.try_recv() {
                    event_handler.handle_event(event);
                }
                return result;
            }

            // Event received
            event = event_receiver.recv() => {
                match event {
                    Some(event) => event_handler.handle_event(event),
                    None => { /* Channel closed: keep waiting for command to finish */ }
                }
            }

            // First Ctrl-C stops between folders/batches
            _ = tokio::signal::ctrl_c(), if !interrupted => {
                warn!("Interrupt received; stopping after the current step");
                interrupted = true;
                cancel.cancel();
            }
        }
    }
}

/// Execute the specified command
async fn execute_command(command: Commands, ctx: OpsCtx) -> Result<OperationResult, CliError> {
    match command {
        Commands::Scan => {
            let result = mediagc_ops::scan(&ctx).await?;
            Ok(OperationResult::Scan(result))
        }

        Commands::Clean {
            yes,
            dry_run,
            folders,
        } => {
            let options = CleanOptions {
                dry_run: dry_run || !yes,
                folders,
            };
            let report = mediagc_ops::clean(&ctx, options).await?;
            Ok(OperationResult::Clean(report))
        }

        // Handled in `run` before a context exists
        Commands::InitDb => Err(mediagc_errors::Error::internal(
            "init-db does not run inside an operations context",
        )
        .into()),
    }
}

/// Build operations context with all required components
async fn build_ops_context(
    config: &Config,
    event_sender: mediagc_events::EventSender,
    cancel: CancellationToken,
) -> Result<OpsCtx, CliError> {
    let catalog = SqliteCatalog::open(&config.database_path()?).await?;
    let store = LocalBlobStore::new(config.storage_root()?);

    let ctx = OpsContextBuilder::new()
        .with_catalog(Arc::new(catalog))
        .with_store(Arc::new(store))
        .with_event_sender(event_sender)
        .with_config(config.clone())
        .with_cancellation(cancel)
        .build()?;

    Ok(ctx)
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled_flag: bool, log_dir: &Path) {
    // Check if debug logging is enabled
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if json_mode {
        // JSON mode: suppress all console output to avoid contaminating JSON
        if debug_enabled {
            // In debug mode with JSON, still log to file
            if let Some(file) = create_log_file(log_dir) {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_env_filter(env_filter("info,mediagc=debug,mediagc_ops=debug"))
                    .init();
                return;
            }
        }
        // Fallback: disable all logging in JSON mode
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else if debug_enabled {
        // Debug mode: structured JSON logs to file
        if let Some(file) = create_log_file(log_dir) {
            tracing_subscriber::fmt()
                .json()
                .with_writer(Mutex::new(file))
                .with_env_filter(env_filter("info,mediagc=debug,mediagc_ops=debug"))
                .init();
            eprintln!("Debug logging enabled: {}", log_dir.display());
        } else {
            // Fallback to stderr
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter("info,mediagc=info"))
                .init();
        }
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter("warn,mediagc=warn,mediagc_ops=warn"))
            .init();
    }
}

fn env_filter(default: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
}

fn create_log_file(log_dir: &Path) -> Option<std::fs::File> {
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {e}");
        return None;
    }

    let log_file = log_dir.join(format!(
        "mediagc-{}.log",
        chrono::Utc::now().format("%Y%m%d-%H%M%S")
    ));

    match std::fs::File::create(&log_file) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to create log file: {e}");
            None
        }
    }
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, global: &GlobalArgs) {
    if let Some(color) = global.color {
        config.general.color = color;
    }
    if global.json {
        config.general.default_output = OutputFormat::Json;
    }
    if let Some(database) = &global.database {
        config.catalog.database_path = Some(database.clone());
    }
    if let Some(root) = &global.storage_root {
        config.storage.root = Some(root.clone());
    }
}
