use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use fruit_core::init_tracing;
use fruit_storage::JsonFileStore;
use tracing::{info, instrument};

use crate::config::ServerConfig;
use crate::router::app;
use crate::state::AppState;

/// Main entry: init logging, prepare the data directory, bind and serve until the process exits.
#[instrument(skip(config))]
pub async fn run_server(config: ServerConfig) -> Result<()> {
    if let Some(dir) = Path::new(&config.log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).context("Failed to create logs directory")?;
        }
    }
    init_tracing(&config.log_file, &config.log_filter)?;

    let store = JsonFileStore::new(&config.data_file);
    store.ensure_parent_dir().await?;

    info!(
        data_file = %store.path().display(),
        log_file = %config.log_file,
        log_filter = %config.log_filter,
        "Initializing server"
    );

    let state = AppState::new(Arc::new(store));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    info!(port = config.port, "Server listening on port {}", config.port);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
