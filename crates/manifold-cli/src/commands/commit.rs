//! Commit the pending buffer as a named configuration entry

use anyhow::{Context, Result};
use manifold_core::Config;

use crate::session::SessionStore;

/// Run the commit command
pub async fn run(config_path: &str, name: &str) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let mut editor = store.load()?;

    let descriptors = editor.pending().len();
    if descriptors == 0 {
        tracing::warn!("Committing an empty descriptor list");
    }

    let id = editor.commit(name);
    store.save(&editor)?;

    tracing::info!("✓ Committed '{}' as entry {} ({} descriptors)", name, id, descriptors);
    tracing::info!("  Run 'manifold sync' to persist the table to the gateway");
    Ok(())
}
