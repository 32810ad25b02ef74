//! modelhub-import - Model Import Staging Service
//!
//! Stages model files picked in a dialog or dropped on the import surface,
//! and serves the import stage to the UI via HTTP REST + SSE.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use modelhub_common::config::{CliOverrides, ConfigResolver};
use modelhub_common::events::EventBus;
use tracing::info;
use tracing_subscriber::EnvFilter;

use modelhub_import::services::{ExtensionRegistry, FilePicker, TokioFileStat};
use modelhub_import::AppState;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "modelhub-import", version, about = "Model import staging service")]
struct Args {
    /// TOML config file (MODELHUB_CONFIG when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP bind address (host:port)
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[cfg(feature = "native-dialog")]
fn file_picker() -> Arc<dyn FilePicker> {
    Arc::new(modelhub_import::services::RfdFilePicker)
}

#[cfg(not(feature = "native-dialog"))]
fn file_picker() -> Arc<dyn FilePicker> {
    Arc::new(modelhub_import::services::HeadlessFilePicker)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Step 1: Resolve configuration (CLI → ENV → TOML → defaults)
    let config = ConfigResolver::new("modelhub-import").resolve(&CliOverrides {
        config_file: args.config,
        bind_address: args.bind,
        log_level: args.log_level,
    })?;

    // Step 2: Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting modelhub-import (Model Import Staging)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &config.source_file {
        info!("Config: {}", path.display());
    }

    // Step 3: Wire collaborators
    let event_bus = EventBus::new(config.event_capacity);
    let extensions = Arc::new(ExtensionRegistry::new());
    let state = AppState::new(event_bus, Arc::new(TokioFileStat), file_picker(), extensions);

    let app = modelhub_import::build_router(state);

    // Step 4: Serve
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Listening on http://{}", config.bind_address);
    info!("Health check: http://{}/health", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
