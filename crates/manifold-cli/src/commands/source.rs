//! Pending descriptor buffer commands

use anyhow::{Context, Result};
use manifold_core::{Config, SourceDescriptor};

use crate::session::SessionStore;

/// Append one descriptor to the pending buffer
pub async fn add(config_path: &str, descriptor: SourceDescriptor) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let mut editor = store.load()?;

    editor.add_descriptor(descriptor);
    store.save(&editor)?;

    tracing::info!("✓ Added descriptor ({} pending)", editor.pending().len());
    Ok(())
}

/// List the pending buffer
pub async fn list(config_path: &str) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let editor = store.load()?;

    if editor.pending().is_empty() {
        println!("No pending descriptors");
        return Ok(());
    }
    for (index, descriptor) in editor.pending().iter().enumerate() {
        println!("  [{index}] {descriptor}");
    }
    Ok(())
}

/// Remove one pending descriptor by position
pub async fn remove(config_path: &str, index: usize) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let mut editor = store.load()?;

    match editor.remove_descriptor(index) {
        Some(descriptor) => {
            store.save(&editor)?;
            tracing::info!("✓ Removed {} ({} pending)", descriptor, editor.pending().len());
        }
        None => {
            tracing::warn!(
                "Index {} out of range ({} pending), nothing removed",
                index,
                editor.pending().len()
            );
        }
    }
    Ok(())
}
