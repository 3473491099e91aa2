//! Integration tests for the editor/gateway interplay
//!
//! Uses an in-memory stub gateway that stores what it is given and renders
//! load responses in the real double-encoded envelope shape, so the tests
//! exercise the same serialization path as the HTTP client:
//! - full table round-trip through sync + initialize
//! - fail-open load behavior
//! - deploy payload selection

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use manifold_core::editor::ConfigEditor;
use manifold_core::error::{Error, Result};
use manifold_core::gateway::{ConfigGateway, SOURCE_CONFIG};
use manifold_core::sources::{
    DatabaseSource, HttpSource, KafkaSource, PollInterval, PollUnit, SourceDescriptor,
};
use manifold_core::wire::{SourceData, SourceRecord, decode_load_envelope};

/// Stub gateway: echoes back what it was last given.
#[derive(Default)]
struct EchoGateway {
    stored: Mutex<Option<SourceData>>,
    deployed: Mutex<Vec<Vec<SourceDescriptor>>>,
}

impl EchoGateway {
    fn with_stored(data: SourceData) -> Self {
        Self {
            stored: Mutex::new(Some(data)),
            deployed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfigGateway for EchoGateway {
    async fn create_configuration(
        &self,
        _config_type: &str,
        payload: &SourceData,
    ) -> Result<Value> {
        *self.stored.lock().unwrap() = Some(payload.clone());
        Ok(json!("SUCCESSFUL"))
    }

    async fn load_configuration(&self, _config_type: &str) -> Result<SourceData> {
        let stored = self
            .stored
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Gateway {
                status: Some(500),
                message: "no configuration stored".to_string(),
            })?;

        // Render the body exactly as the gateway would (payload JSON-encoded
        // a second time into the `data` field) and decode it back through
        // the envelope path.
        let body = json!({ "data": serde_json::to_string(&stored).unwrap() }).to_string();
        decode_load_envelope(&body)
    }

    async fn deploy_configuration(
        &self,
        _config_type: &str,
        descriptors: &[SourceDescriptor],
    ) -> Result<Value> {
        self.deployed.lock().unwrap().push(descriptors.to_vec());
        Ok(json!("SUCCESSFUL"))
    }
}

fn database_descriptor() -> SourceDescriptor {
    SourceDescriptor::Database(DatabaseSource {
        engine: "postgres".to_string(),
        host: "db.internal".to_string(),
        port: 5432,
        user: "etl".to_string(),
        password: "secret".to_string(),
        database: "sales".to_string(),
        poll: PollInterval {
            every: 5,
            unit: PollUnit::Minute,
        },
    })
}

fn kafka_descriptor() -> SourceDescriptor {
    SourceDescriptor::Kafka(KafkaSource {
        broker: "10.0.0.12".to_string(),
        port: "9092".to_string(),
        topic: "orders".to_string(),
    })
}

fn http_descriptor() -> SourceDescriptor {
    SourceDescriptor::Http(HttpSource {
        url: "http://feeds.example.com/orders".to_string(),
        poll: PollInterval {
            every: 30,
            unit: PollUnit::Second,
        },
    })
}

#[tokio::test]
async fn test_table_round_trips_through_sync_and_initialize() {
    let gateway = EchoGateway::default();

    let mut editor = ConfigEditor::new();
    editor.add_descriptor(database_descriptor());
    editor.add_descriptor(kafka_descriptor());
    editor.commit("warehouse");
    editor.add_descriptor(http_descriptor());
    editor.commit("feeds");

    let ack = editor.sync(&gateway, SOURCE_CONFIG).await.unwrap();
    assert_eq!(ack, json!("SUCCESSFUL"));

    let mut restored = ConfigEditor::new();
    let count = restored.initialize(&gateway, SOURCE_CONFIG).await.unwrap();
    assert_eq!(count, 2);

    // Same ids, names, and descriptor field sets.
    assert_eq!(restored.entries(), editor.entries());
    assert_eq!(restored.next_id(), editor.next_id());
}

#[tokio::test]
async fn test_initialize_failure_leaves_table_unchanged() {
    let gateway = EchoGateway::default(); // nothing stored: every load fails

    let mut editor = ConfigEditor::new();
    editor.add_descriptor(http_descriptor());
    editor.commit("existing");
    let before = editor.entries().to_vec();

    let err = editor.initialize(&gateway, SOURCE_CONFIG).await.unwrap_err();
    assert!(matches!(err, Error::Gateway { .. }));
    assert_eq!(editor.entries(), &before[..]);
}

#[tokio::test]
async fn test_initialize_seed_scenario() {
    let gateway = EchoGateway::with_stored(SourceData {
        records: vec![SourceRecord {
            id: 5,
            name: "x".to_string(),
            descriptors: vec![],
        }],
    });

    let mut editor = ConfigEditor::new();
    let count = editor.initialize(&gateway, SOURCE_CONFIG).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(editor.entries().len(), 1);
    assert_eq!(editor.entries()[0].id, 5);
    assert_eq!(editor.entries()[0].name, "x");
    assert!(editor.entries()[0].descriptors.is_empty());
    assert_eq!(editor.next_id(), 6);
}

#[tokio::test]
async fn test_deploy_sends_selected_entry_descriptors() {
    let gateway = EchoGateway::default();

    let mut editor = ConfigEditor::new();
    editor.add_descriptor(database_descriptor());
    let first = editor.commit("warehouse");
    editor.add_descriptor(kafka_descriptor());
    editor.add_descriptor(http_descriptor());
    let second = editor.commit("streams");

    editor.deploy(&gateway, SOURCE_CONFIG, second).await.unwrap();

    let deployed = gateway.deployed.lock().unwrap();
    assert_eq!(deployed.len(), 1);
    assert_eq!(deployed[0].len(), 2);
    assert_eq!(deployed[0][0].kind(), "Kafka");
    assert_eq!(deployed[0][1].kind(), "Http");
    drop(deployed);

    editor.deploy(&gateway, SOURCE_CONFIG, first).await.unwrap();
    assert_eq!(gateway.deployed.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_deploy_unknown_id_is_an_error() {
    let gateway = EchoGateway::default();
    let editor = ConfigEditor::new();

    let err = editor.deploy(&gateway, SOURCE_CONFIG, 42).await.unwrap_err();
    match err {
        Error::UnknownEntry { id } => assert_eq!(id, 42),
        other => panic!("Expected UnknownEntry, got {other:?}"),
    }
    assert!(gateway.deployed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_descriptor_kinds_dropped_on_load() {
    let gateway = EchoGateway::with_stored(SourceData {
        records: vec![SourceRecord {
            id: 1,
            name: "mixed".to_string(),
            descriptors: vec![
                json!({"TYPE": "Http", "URL": "http://a", "DURATION_TIME": 1}),
                json!({"TYPE": "Telegraph", "WIRE": "west"}),
            ],
        }],
    });

    let mut editor = ConfigEditor::new();
    editor.initialize(&gateway, SOURCE_CONFIG).await.unwrap();
    assert_eq!(editor.entries()[0].descriptors.len(), 1);
    assert_eq!(editor.entries()[0].descriptors[0].kind(), "Http");
}
