//! Metadata Source Gateway
//!
//! Abstract trait defining where the instance metadata document comes from.

use async_trait::async_trait;

use crate::domain::models::instance::InstanceMetadata;
use crate::shared::errors::MetadataError;

/// Source of the instance metadata document
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch and decode the full instance metadata document
    async fn fetch_instance(&self) -> Result<InstanceMetadata, MetadataError>;
}
