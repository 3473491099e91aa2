//! Deploy one configuration entry

use anyhow::{Context, Result};
use manifold_core::Config;
use manifold_gateway::HttpGateway;

use crate::session::SessionStore;

/// Run the deploy command
pub async fn run(config_path: &str, id: u64, config_type: &str) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let editor = store.load()?;

    let gateway = HttpGateway::new(&config.project.gateway.url);
    let ack = editor
        .deploy(&gateway, config_type, id)
        .await
        .with_context(|| format!("Deploy of entry {id} failed"))?;

    tracing::info!("✓ Deployed entry {} (ack: {})", id, ack);
    Ok(())
}
