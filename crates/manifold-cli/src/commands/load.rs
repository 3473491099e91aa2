//! Seed the local table from the gateway

use anyhow::{Context, Result};
use manifold_core::Config;
use manifold_gateway::HttpGateway;

use crate::session::SessionStore;

/// Run the load command
pub async fn run(config_path: &str, config_type: &str, replace: bool) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let mut editor = store.load()?;

    if replace {
        editor.clear_table();
    } else if !editor.entries().is_empty() {
        anyhow::bail!(
            "Local table already has {} entries; pass --replace to overwrite it",
            editor.entries().len()
        );
    }

    let gateway = HttpGateway::new(&config.project.gateway.url);
    let count = editor
        .initialize(&gateway, config_type)
        .await
        .context("Load failed, local table left unchanged")?;

    store.save(&editor)?;
    tracing::info!("✓ Loaded {} entries from {}", count, config.project.gateway.url);
    Ok(())
}
