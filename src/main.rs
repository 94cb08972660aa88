//! medreg-gateway - Rust Implementation
//!
//! HTTP API gateway aggregating regulatory data for medical-device
//! compliance research.

use medreg_gateway::{api, core, db};

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (handles CLI args, env vars, and config file)
    let config = match core::config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Print error to stderr since logging isn't initialized yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging system based on configuration
    let _logger = match core::Logger::init(&config.logging) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return Err(e);
        }
    };

    info!("Configuration loaded successfully");
    info!("Starting medreg-gateway v{}", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Server configuration"
    );
    info!(
        contacts = ?config.stores.contacts_path,
        documents = ?config.stores.documents_path,
        "Store configuration"
    );

    if config.openfda.api_key.is_empty() {
        warn!("openFDA API key is not configured; enforcement and adverse-event searches will fail");
    }

    // Open the two external read-only stores. A missing file still opens (an
    // empty database), so only warn here; queries against it surface as
    // per-request store errors.
    for path in [&config.stores.contacts_path, &config.stores.documents_path] {
        if !path.exists() {
            warn!(path = ?path, "Store file does not exist yet");
        }
    }

    info!("Opening local stores...");
    let busy_timeout = Duration::from_millis(config.stores.busy_timeout);
    let contacts_db = Arc::new(db::DatabaseManager::new(
        &config.stores.contacts_path,
        config.stores.pool_size,
        busy_timeout,
    )?);
    let documents_db = Arc::new(db::DatabaseManager::new(
        &config.stores.documents_path,
        config.stores.pool_size,
        busy_timeout,
    )?);
    info!("Local stores opened successfully");

    // Initialize API server
    info!("Initializing HTTP server...");
    let server_url = format!("http://{}:{}", config.server.host, config.server.port);
    let server = api::ApiServer::new(config, contacts_db, documents_db)?;

    info!(url = %server_url, "Server ready - starting to serve requests");

    // Start serving (this will block until shutdown signal)
    server.serve().await?;

    Ok(())
}
