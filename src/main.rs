//! apimask CLI
//!
//! Companion tool for debugging catalogue visibility configuration:
//! evaluates single operations or whole operation manifests against the
//! configured mask lists.

use anyhow::Context;
use apimask::catalogue::{Catalogue, OperationDescriptor};
use apimask::config::{LogFormat, load_config};
use apimask::visibility::VisibilityEngine;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Catalogue visibility for declared API operations
#[derive(Parser, Debug)]
#[command(name = "apimask")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "APIMASK_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); defaults to the
    /// configured logging.level
    #[arg(long, env = "APIMASK_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide visibility for a single operation
    Check {
        /// Owning group (controller) name
        group: String,

        /// Operation friendly name, if it has one
        operation: Option<String>,
    },

    /// Classify a manifest of operations and print the catalogue
    Catalogue {
        /// JSON file with an array of operation descriptors
        #[arg(short, long)]
        manifest: PathBuf,

        /// Only print entries that would be advertised
        #[arg(long)]
        visible_only: bool,
    },
}

fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration first: the log level and format may come from it
    let config = load_config(args.config.as_deref())
        .context("Failed to load configuration")?;

    let level = args.log_level.as_deref().unwrap_or(config.logging.level.as_str());
    init_tracing(level, config.logging.format);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting apimask");

    // Create the visibility engine from the resolved mask lists
    let engine = VisibilityEngine::from_config(&config.catalogue);
    info!(masks = engine.mask_count(), "Visibility engine ready");

    match args.command {
        Command::Check { group, operation } => {
            let visible = engine
                .is_visible(&group, operation.as_deref())
                .inspect_err(|e| error!(error = %e, "Visibility evaluation failed"))?;

            println!("{}", if visible { "visible" } else { "hidden" });
        }
        Command::Catalogue {
            manifest,
            visible_only,
        } => {
            let raw = std::fs::read_to_string(&manifest)
                .with_context(|| format!("Failed to read manifest {}", manifest.display()))?;
            let operations: Vec<OperationDescriptor> =
                serde_json::from_str(&raw).context("Invalid operation manifest")?;

            let catalogue = Catalogue::build(&engine, operations)
                .inspect_err(|e| error!(error = %e, "Catalogue build failed"))?;

            if visible_only {
                let visible: Vec<_> = catalogue.visible().collect();
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&catalogue)?);
            }
        }
    }

    Ok(())
}
