//! Manifold Core Library
//!
//! This crate provides the core functionality for Manifold:
//! - Source/sink descriptor model in the gateway's wire shape
//! - Configuration editor (pending buffer, table, id assignment)
//! - Gateway contract for create/load/deploy
//! - File payload ingestion
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Descriptors │────▶│   Editor    │────▶│   Gateway   │
//! │ (DB/File/…) │     │ (table+ids) │     │ (REST, ext) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use manifold_core::{ConfigEditor, SourceDescriptor};
//!
//! let mut editor = ConfigEditor::new();
//! editor.add_descriptor(descriptor);
//! let id = editor.commit("prod-db");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod editor;
pub mod error;
pub mod gateway;
pub mod ingest;
pub mod sources;
pub mod wire;

pub use config::{Config, ProjectConfig};
pub use editor::{ConfigEditor, ConfigEntry};
pub use error::{Error, Result};
pub use gateway::ConfigGateway;
pub use sources::SourceDescriptor;
