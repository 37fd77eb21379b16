//! Azure Instance Metadata Service Client
//!
//! reqwest implementation of the MetadataSource gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::gateways::MetadataSource;
use crate::domain::models::instance::InstanceMetadata;
use crate::infrastructure::driven_adapters::config::MetadataConfig;
use crate::shared::errors::MetadataError;

/// Header IMDS requires on every request
const METADATA_HEADER: &str = "Metadata";

/// Azure IMDS client
pub struct AzureMetadataClient {
    client: Client,
    endpoint: String,
    api_version: String,
    format: String,
}

impl AzureMetadataClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Request` if the HTTP client cannot be built.
    pub fn new(config: &MetadataConfig) -> Result<Self, MetadataError> {
        // IMDS is link-local; it must never be reached through a proxy.
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_version: config.api_version.clone(),
            format: config.format.clone(),
        })
    }
}

#[async_trait]
impl MetadataSource for AzureMetadataClient {
    async fn fetch_instance(&self) -> Result<InstanceMetadata, MetadataError> {
        tracing::debug!(endpoint = %self.endpoint, api_version = %self.api_version, "Querying instance metadata");

        let response = self
            .client
            .get(&self.endpoint)
            .header(METADATA_HEADER, "True")
            .query(&[("format", self.format.as_str()), ("api-version", self.api_version.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Metadata endpoint returned non-success status");
            return Err(MetadataError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let metadata = serde_json::from_slice::<InstanceMetadata>(&body)?;

        Ok(metadata)
    }
}
