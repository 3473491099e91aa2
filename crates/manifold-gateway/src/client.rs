//! reqwest-backed gateway client

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use manifold_core::error::{Error, Result};
use manifold_core::gateway::ConfigGateway;
use manifold_core::sources::SourceDescriptor;
use manifold_core::wire::{SourceData, decode_load_envelope};

/// HTTP implementation of the gateway contract.
///
/// Stateless beyond the shared connection pool: no caching, no retries, no
/// backoff, no timeout. A hung request blocks only its own caller.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a client against a gateway base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        config_type: &str,
        payload: &T,
    ) -> Result<Value> {
        tracing::debug!(path, config_type, "gateway POST");
        let response = self
            .client
            .post(self.endpoint(path))
            .query(&[("configType", config_type)])
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;
        read_ack(response).await
    }
}

#[async_trait]
impl ConfigGateway for HttpGateway {
    async fn create_configuration(
        &self,
        config_type: &str,
        payload: &SourceData,
    ) -> Result<Value> {
        self.post_json("createConfiguration", config_type, payload)
            .await
    }

    async fn load_configuration(&self, config_type: &str) -> Result<SourceData> {
        tracing::debug!(config_type, "gateway GET loadConfiguration");
        let response = self
            .client
            .get(self.endpoint("loadConfiguration"))
            .query(&[("configType", config_type)])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(Error::Gateway {
                status: Some(status.as_u16()),
                message: body,
            });
        }
        decode_load_envelope(&body)
    }

    async fn deploy_configuration(
        &self,
        config_type: &str,
        descriptors: &[SourceDescriptor],
    ) -> Result<Value> {
        self.post_json("deployConfiguration", config_type, descriptors)
            .await
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Gateway {
        status: err.status().map(|status| status.as_u16()),
        message: err.to_string(),
    }
}

async fn read_ack(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(Error::Gateway {
            status: Some(status.as_u16()),
            message: body,
        });
    }
    serde_json::from_str(&body).map_err(|err| Error::Gateway {
        status: Some(status.as_u16()),
        message: format!("invalid JSON ack: {err}"),
    })
}
