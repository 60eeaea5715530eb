//! iotv-sut - mock IoT device service
//!
//! Serves `POST /api/config` and `GET /api/status` on top of a SQLite
//! store so test suites can check API responses against persisted state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use iotv_common::config::{RootFolderInitializer, RootFolderResolver, TomlConfig};
use iotv_common::db::init_database;
use iotv_sut::{build_router, logging, AppState};
use tokio::signal;
use tracing::info;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Command-line arguments for iotv-sut
#[derive(Parser, Debug)]
#[command(name = "iotv-sut")]
#[command(about = "Mock IoT device configuration service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "IOTV_PORT")]
    port: Option<u16>,

    /// Address to bind to
    #[arg(short, long, env = "IOTV_BIND")]
    bind: Option<String>,

    /// Folder holding the database file (overrides IOTV_ROOT_FOLDER)
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// TOML config file (defaults to the platform config location)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = logging::init();

    info!(
        "Starting mock IoT device (iotv-sut) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let toml_config = match &args.config {
        Some(path) => TomlConfig::load(path),
        None => TomlConfig::load_default(),
    }
    .context("Failed to load config file")?;
    log_level.apply_config_level(toml_config.log_level())?;

    let root_folder = RootFolderResolver::new()
        .with_cli_arg(args.root_folder)
        .with_toml_config(&toml_config)
        .resolve();

    let initializer = RootFolderInitializer::new(root_folder)
        .with_database_file(toml_config.database_file());
    initializer
        .ensure_directory_exists()
        .context("Failed to initialize root folder")?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .context("Failed to open database")?;

    let app = build_router(AppState::new(pool));

    let port = args.port.or(toml_config.port).unwrap_or(DEFAULT_PORT);
    let bind = args
        .bind
        .or_else(|| toml_config.bind_address.clone())
        .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
    let addr = format!("{}:{}", bind, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Mock IoT device running on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
