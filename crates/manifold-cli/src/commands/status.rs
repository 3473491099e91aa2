//! Show the editing session

use anyhow::{Context, Result};
use manifold_core::Config;

use crate::session::SessionStore;

/// Run the status command
pub async fn run(config_path: &str) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let store = SessionStore::new(&config);
    let editor = store.load()?;

    println!("Project: {}", config.project.name);
    println!("Gateway: {}", config.project.gateway.url);
    println!();

    println!("Pending descriptors:");
    if editor.pending().is_empty() {
        println!("  (none)");
    }
    for (index, descriptor) in editor.pending().iter().enumerate() {
        println!("  [{index}] {descriptor}");
    }
    println!();

    println!("Configuration table:");
    if editor.entries().is_empty() {
        println!("  (empty)");
    }
    for entry in editor.entries() {
        println!(
            "  [{}] {} - {} descriptors",
            entry.id,
            entry.name,
            entry.descriptors.len()
        );
    }

    Ok(())
}
