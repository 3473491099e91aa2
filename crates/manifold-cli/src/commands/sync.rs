//! Push the configuration table to the gateway

use anyhow::{Context, Result};
use manifold_core::Config;
use manifold_gateway::HttpGateway;

use crate::session::SessionStore;

/// Run the sync command
pub async fn run(config_path: &str, config_type: &str) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let editor = store.load()?;

    if editor.entries().is_empty() {
        tracing::warn!("Configuration table is empty; the gateway may reject the sync");
    }

    let gateway = HttpGateway::new(&config.project.gateway.url);
    let ack = editor
        .sync(&gateway, config_type)
        .await
        .context("Sync failed")?;

    tracing::info!(
        "✓ Synced {} entries to {} (ack: {})",
        editor.entries().len(),
        config.project.gateway.url,
        ack
    );
    Ok(())
}
