//! Configuration editor
//!
//! The editor owns the in-progress descriptor buffer and the table of named
//! configuration entries, and orchestrates load/sync/deploy against a
//! gateway. Identifiers are monotonic: the next id is always one past the
//! highest id ever assigned or seeded, starting from zero on an empty table.
//!
//! Lifecycle: descriptors accumulate in the pending buffer, a commit drains
//! the buffer into a new named entry, a sync persists the whole table, and a
//! deploy submits one entry's descriptors for activation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::gateway::ConfigGateway;
use crate::sources::SourceDescriptor;
use crate::wire::SourceData;

/// A named, committed group of descriptors.
///
/// Never mutated after creation; the table is persisted as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Monotonically assigned identifier
    pub id: u64,

    /// Human-readable name
    pub name: String,

    /// Ordered descriptor list
    #[serde(default)]
    pub descriptors: Vec<SourceDescriptor>,
}

/// Editing state: pending buffer, entry table, and id watermark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigEditor {
    #[serde(default)]
    pending: Vec<SourceDescriptor>,

    #[serde(default)]
    entries: Vec<ConfigEntry>,

    /// Highest id assigned or seeded so far; 0 on an empty table
    #[serde(default)]
    last_id: u64,
}

impl ConfigEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-progress, uncommitted descriptor buffer.
    pub fn pending(&self) -> &[SourceDescriptor] {
        &self.pending
    }

    /// The committed configuration table.
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Identifier the next commit will receive.
    pub fn next_id(&self) -> u64 {
        self.last_id + 1
    }

    /// Look up one entry by id.
    pub fn entry(&self, id: u64) -> Option<&ConfigEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Append a descriptor to the pending buffer.
    pub fn add_descriptor(&mut self, descriptor: SourceDescriptor) {
        tracing::debug!(kind = descriptor.kind(), "descriptor added to buffer");
        self.pending.push(descriptor);
    }

    /// Remove one pending descriptor by position.
    ///
    /// An out-of-range index returns `None` and leaves the buffer unchanged.
    pub fn remove_descriptor(&mut self, index: usize) -> Option<SourceDescriptor> {
        if index < self.pending.len() {
            Some(self.pending.remove(index))
        } else {
            None
        }
    }

    /// Commit the pending buffer as a new named entry and return its id.
    ///
    /// The buffer is drained into the entry, so the next commit starts from
    /// an empty buffer.
    pub fn commit(&mut self, name: &str) -> u64 {
        let id = self.last_id + 1;
        let entry = ConfigEntry {
            id,
            name: name.to_string(),
            descriptors: std::mem::take(&mut self.pending),
        };
        tracing::info!(id, name, descriptors = entry.descriptors.len(), "committed entry");
        self.entries.push(entry);
        self.last_id = id;
        id
    }

    /// Append remote records to the table and raise the id watermark to the
    /// highest id seen.
    pub fn seed(&mut self, data: SourceData) {
        for record in data.records {
            let entry = record.into_entry();
            self.last_id = self.last_id.max(entry.id);
            self.entries.push(entry);
        }
    }

    /// Drop every committed entry and reset the id watermark.
    ///
    /// The pending buffer is untouched.
    pub fn clear_table(&mut self) {
        self.entries.clear();
        self.last_id = 0;
    }

    /// Serialize the whole table into the gateway's persistence shape.
    pub fn sync_payload(&self) -> Result<SourceData> {
        SourceData::from_entries(&self.entries)
    }

    /// Seed the table from the gateway. Returns the number of entries added;
    /// on failure the table is left unchanged.
    pub async fn initialize<G: ConfigGateway + ?Sized>(
        &mut self,
        gateway: &G,
        config_type: &str,
    ) -> Result<usize> {
        let data = gateway.load_configuration(config_type).await?;
        let count = data.records.len();
        self.seed(data);
        tracing::info!(config_type, count, "seeded table from gateway");
        Ok(count)
    }

    /// Persist the whole table through the gateway's create endpoint.
    pub async fn sync<G: ConfigGateway + ?Sized>(
        &self,
        gateway: &G,
        config_type: &str,
    ) -> Result<Value> {
        let payload = self.sync_payload()?;
        gateway.create_configuration(config_type, &payload).await
    }

    /// Submit one entry's descriptors through the gateway's deploy endpoint.
    pub async fn deploy<G: ConfigGateway + ?Sized>(
        &self,
        gateway: &G,
        config_type: &str,
        id: u64,
    ) -> Result<Value> {
        let entry = self.entry(id).ok_or(Error::UnknownEntry { id })?;
        gateway
            .deploy_configuration(config_type, &entry.descriptors)
            .await
    }
}
