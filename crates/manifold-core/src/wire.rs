//! Legacy wire shape of the configuration gateway
//!
//! The gateway stores configurations as `SourceData` records with the field
//! names of the original contract (`Source`, `NAME`, `TYPEOF`). Load
//! responses additionally wrap the payload in a JSON-encoded string field,
//! so reaching the records takes a second parse; that quirk is confined to
//! [`decode_load_envelope`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::editor::ConfigEntry;
use crate::error::{Error, Result};
use crate::sources::SourceDescriptor;

/// One named configuration as the gateway stores it.
///
/// `TYPEOF` elements stay raw JSON here; [`SourceRecord::into_entry`] turns
/// them into typed descriptors, dropping any whose discriminant is not
/// recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Entry identifier
    #[serde(rename = "Source")]
    pub id: u64,

    /// Human-readable configuration name
    #[serde(rename = "NAME", default)]
    pub name: String,

    /// Descriptor list, still in raw wire form
    #[serde(rename = "TYPEOF", default)]
    pub descriptors: Vec<Value>,
}

impl SourceRecord {
    /// Build a record from a typed entry.
    pub fn from_entry(entry: &ConfigEntry) -> Result<Self> {
        let descriptors = entry
            .descriptors
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            id: entry.id,
            name: entry.name.clone(),
            descriptors,
        })
    }

    /// Decode into a typed entry.
    ///
    /// Descriptors with an unrecognized `TYPE` are dropped from the entry,
    /// not treated as an error.
    pub fn into_entry(self) -> ConfigEntry {
        let descriptors = self
            .descriptors
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<SourceDescriptor>(raw.clone()) {
                Ok(descriptor) => Some(descriptor),
                Err(err) => {
                    tracing::warn!(
                        record = self.id,
                        %err,
                        "dropping unrecognized descriptor: {raw}"
                    );
                    None
                }
            })
            .collect();
        ConfigEntry {
            id: self.id,
            name: self.name,
            descriptors,
        }
    }
}

/// The unit of persistence: every record the gateway knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceData {
    /// Stored configuration records
    #[serde(rename = "SourceData", default)]
    pub records: Vec<SourceRecord>,
}

impl SourceData {
    /// Build the persistence payload from a table of entries.
    pub fn from_entries(entries: &[ConfigEntry]) -> Result<Self> {
        let records = entries
            .iter()
            .map(SourceRecord::from_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }
}

/// Load response envelope: the payload arrives JSON-encoded a second time.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadEnvelope {
    /// JSON document that parses to [`SourceData`]
    pub data: String,
}

/// Parse a load response body down to its records.
pub fn decode_load_envelope(body: &str) -> Result<SourceData> {
    let envelope: LoadEnvelope = serde_json::from_str(body).map_err(|err| Error::Envelope {
        message: format!("outer envelope: {err}"),
    })?;
    serde_json::from_str(&envelope.data).map_err(|err| Error::Envelope {
        message: format!("inner payload: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_double_encoded_envelope() {
        let inner = json!({
            "SourceData": [
                {"Source": 5, "NAME": "x", "TYPEOF": []}
            ]
        });
        let body = json!({ "data": inner.to_string() }).to_string();

        let data = decode_load_envelope(&body).unwrap();
        assert_eq!(data.records.len(), 1);
        assert_eq!(data.records[0].id, 5);
        assert_eq!(data.records[0].name, "x");
        assert!(data.records[0].descriptors.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_envelope_body() {
        let err = decode_load_envelope(r#"{"SourceData": []}"#).unwrap_err();
        assert!(matches!(err, Error::Envelope { .. }));
        assert!(err.to_string().contains("outer envelope"));
    }

    #[test]
    fn test_decode_rejects_malformed_inner_payload() {
        let body = json!({ "data": "not json" }).to_string();
        let err = decode_load_envelope(&body).unwrap_err();
        assert!(matches!(err, Error::Envelope { .. }));
        assert!(err.to_string().contains("inner payload"));
    }

    #[test]
    fn test_into_entry_drops_unknown_descriptors() {
        let record = SourceRecord {
            id: 7,
            name: "mixed".to_string(),
            descriptors: vec![
                json!({"TYPE": "Http", "URL": "http://a", "DURATION_TIME": 1}),
                json!({"TYPE": "Carrier-Pigeon", "COOP": "roof"}),
                json!({"TYPE": "Kafka", "IP": "1.2.3.4", "PORT": "9092", "TOPIC": "t"}),
            ],
        };
        let entry = record.into_entry();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.descriptors.len(), 2);
        assert_eq!(entry.descriptors[0].kind(), "Http");
        assert_eq!(entry.descriptors[1].kind(), "Kafka");
    }

    #[test]
    fn test_record_shape_uses_wire_names() {
        let entry = ConfigEntry {
            id: 3,
            name: "prod".to_string(),
            descriptors: vec![],
        };
        let record = SourceRecord::from_entry(&entry).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Source"], 3);
        assert_eq!(value["NAME"], "prod");
        assert!(value["TYPEOF"].as_array().unwrap().is_empty());

        let data = SourceData {
            records: vec![record],
        };
        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("SourceData").is_some());
    }

    #[test]
    fn test_record_missing_optional_fields() {
        let data: SourceData = serde_json::from_str(
            r#"{"SourceData": [{"Source": 1}]}"#,
        )
        .unwrap();
        assert_eq!(data.records[0].name, "");
        assert!(data.records[0].descriptors.is_empty());
    }
}
