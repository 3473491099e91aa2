//! Source and sink descriptor model
//!
//! A descriptor describes one external data source or destination (database
//! connection, uploaded file, HTTP endpoint, Kafka topic). Field names follow
//! the legacy wire contract of the gateway, so a serialized descriptor can be
//! stored and deployed by it unchanged.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One configured data source or destination.
///
/// The wire discriminant is the `TYPE` field; exactly one variant's fields
/// exist per descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "TYPE")]
pub enum SourceDescriptor {
    /// Relational database polled on an interval
    Database(DatabaseSource),

    /// Spreadsheet-style file shipped inline, re-read on an interval
    File(FileSource),

    /// HTTP endpoint polled on an interval
    Http(HttpSource),

    /// Kafka topic; push-based, so no poll interval
    Kafka(KafkaSource),
}

impl SourceDescriptor {
    /// Wire discriminant of this descriptor
    pub fn kind(&self) -> &'static str {
        match self {
            SourceDescriptor::Database(_) => "Database",
            SourceDescriptor::File(_) => "File",
            SourceDescriptor::Http(_) => "Http",
            SourceDescriptor::Kafka(_) => "Kafka",
        }
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceDescriptor::Database(db) => write!(
                f,
                "Database {}://{}@{}:{}/{} ({})",
                db.engine, db.user, db.host, db.port, db.database, db.poll
            ),
            SourceDescriptor::File(file) => write!(
                f,
                "File {} ({} bytes base64, {})",
                file.kind,
                file.payload.len(),
                file.poll
            ),
            SourceDescriptor::Http(http) => write!(f, "Http {} ({})", http.url, http.poll),
            SourceDescriptor::Kafka(kafka) => write!(
                f,
                "Kafka {}:{} topic {}",
                kafka.broker, kafka.port, kafka.topic
            ),
        }
    }
}

/// Database source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSource {
    /// Database engine (e.g. postgres, mysql)
    #[serde(rename = "DB_TYPE")]
    pub engine: String,

    /// Host name or address
    #[serde(rename = "DB_HOST")]
    pub host: String,

    /// TCP port
    #[serde(rename = "DB_PORT")]
    pub port: u16,

    /// Login user
    #[serde(rename = "DB_USER")]
    pub user: String,

    /// Login password
    #[serde(rename = "DB_PASSWORD")]
    pub password: String,

    /// Database name
    #[serde(rename = "DB_NAME")]
    pub database: String,

    /// Polling interval
    #[serde(flatten)]
    pub poll: PollInterval,
}

/// File source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSource {
    /// Accepted file kind
    #[serde(rename = "FILE_TYPE")]
    pub kind: FileKind,

    /// Raw file bytes, base64-encoded
    #[serde(rename = "FILE_DATA")]
    pub payload: String,

    /// Polling interval
    #[serde(flatten)]
    pub poll: PollInterval,
}

/// HTTP source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSource {
    /// Endpoint URL
    #[serde(rename = "URL")]
    pub url: String,

    /// Polling interval
    #[serde(flatten)]
    pub poll: PollInterval,
}

/// Kafka source configuration
///
/// The broker port is a string on the wire; the legacy gateway types it that
/// way, unlike the numeric database port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KafkaSource {
    /// Broker address
    #[serde(rename = "IP")]
    pub broker: String,

    /// Broker port
    #[serde(rename = "PORT")]
    pub port: String,

    /// Topic name
    #[serde(rename = "TOPIC")]
    pub topic: String,
}

/// How often a polled source is re-read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollInterval {
    /// Interval magnitude
    #[serde(rename = "DURATION_TIME")]
    pub every: u64,

    /// Interval unit
    #[serde(rename = "DURATION_TYPE", default)]
    pub unit: PollUnit,
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {} {:?}", self.every, self.unit)
    }
}

/// Unit of a poll interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PollUnit {
    /// Seconds
    Second,
    /// Minutes
    #[default]
    Minute,
    /// Hours
    Hour,
}

/// Accepted kinds for inline file payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Comma-separated values
    Csv,
    /// Office Open XML spreadsheet
    Xlsx,
}

impl FileKind {
    /// Canonical MIME type of this kind
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Csv => "text/csv",
            FileKind::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Recognize a kind from its MIME type
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "text/csv" => Some(FileKind::Csv),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(FileKind::Xlsx)
            }
            _ => None,
        }
    }

    /// Recognize a kind from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => Some(FileKind::Csv),
            Some("xlsx") => Some(FileKind::Xlsx),
            _ => None,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Csv => write!(f, "csv"),
            FileKind::Xlsx => write!(f, "xlsx"),
        }
    }
}
