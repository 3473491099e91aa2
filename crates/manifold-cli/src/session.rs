//! Local editing session persistence
//!
//! A CLI process is short-lived, so the editor state (pending descriptors
//! and the configuration table) lives in a session file between invocations.
//! Last write wins; there is no locking against concurrent invocations.

use anyhow::{Context, Result};
use std::path::PathBuf;

use manifold_core::{Config, ConfigEditor};

/// Reads and writes the editor state under the project's session directory.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store for the given project configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.session_file(),
        }
    }

    /// Load the persisted editor; a missing session file yields a fresh one.
    pub fn load(&self) -> Result<ConfigEditor> {
        if !self.path.exists() {
            return Ok(ConfigEditor::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file {}", self.path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse session file {}", self.path.display()))
    }

    /// Persist the editor, creating the session directory if needed.
    pub fn save(&self, editor: &ConfigEditor) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session dir {}", parent.display()))?;
        }
        let contents = serde_yaml::to_string(editor).context("Failed to serialize session")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))
    }
}
