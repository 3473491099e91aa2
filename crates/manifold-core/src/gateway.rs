//! Gateway contract
//!
//! The remote gateway stores and deploys configurations; it is an external
//! collaborator, specified here only at the interface boundary. The editor
//! depends on this trait, never on a transport; the HTTP implementation
//! lives in the `manifold-gateway` crate.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::sources::SourceDescriptor;
use crate::wire::SourceData;

/// Config type for input-source configurations
pub const SOURCE_CONFIG: &str = "sourceConfig";

/// Config type for output-destination configurations
pub const DESTINATION_CONFIG: &str = "destinationConfig";

/// Client-side contract for the configuration gateway.
///
/// Every operation is a single request/response exchange keyed by a
/// `config_type` query value, letting one endpoint family serve multiple
/// configuration kinds. No caching, no retries, no backoff; every failure is
/// terminal for that one call.
#[async_trait]
pub trait ConfigGateway: Send + Sync {
    /// Persist a full configuration table. Returns the gateway's JSON ack.
    async fn create_configuration(
        &self,
        config_type: &str,
        payload: &SourceData,
    ) -> Result<Value>;

    /// Fetch the stored configuration table.
    async fn load_configuration(&self, config_type: &str) -> Result<SourceData>;

    /// Submit one entry's descriptors for activation. Returns the JSON ack.
    async fn deploy_configuration(
        &self,
        config_type: &str,
        descriptors: &[SourceDescriptor],
    ) -> Result<Value>;
}
