//! Get Instance Summary Use Case
//!
//! Fetches the instance metadata document and extracts VM name, zone and
//! the primary private IP.

use std::sync::Arc;

use crate::domain::gateways::MetadataSource;
use crate::domain::models::instance::InstanceSummary;
use crate::shared::errors::UseCaseError;

/// Use case for summarizing the current instance
pub struct GetInstanceSummaryUseCase {
    metadata_source: Arc<dyn MetadataSource>,
}

impl GetInstanceSummaryUseCase {
    /// Create a new GetInstanceSummaryUseCase
    #[must_use]
    pub fn new(metadata_source: Arc<dyn MetadataSource>) -> Self {
        Self { metadata_source }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Metadata` if the document cannot be fetched or decoded.
    /// Returns `UseCaseError::IncompleteMetadata` if the primary interface has no IPv4 address.
    pub async fn execute(&self) -> Result<InstanceSummary, UseCaseError> {
        tracing::debug!("Fetching instance metadata");

        let metadata = self.metadata_source.fetch_instance().await?;

        let private_ip = match metadata.primary_ipv4() {
            Some(address) => address.private_ip.clone(),
            None if metadata.network.interface.is_empty() => {
                tracing::warn!(vm_name = %metadata.compute.name, "Metadata has no network interface");
                return Err(UseCaseError::IncompleteMetadata(
                    "no network interface".to_string(),
                ));
            }
            None => {
                tracing::warn!(vm_name = %metadata.compute.name, "Primary interface has no IPv4 address");
                return Err(UseCaseError::IncompleteMetadata(
                    "primary interface has no IPv4 address".to_string(),
                ));
            }
        };

        let summary = InstanceSummary::new(metadata.compute.name, metadata.compute.zone, private_ip);

        tracing::debug!(
            vm_name = %summary.vm_name(),
            zone = %summary.zone(),
            private_ip = %summary.private_ip(),
            "Instance summary built"
        );
        Ok(summary)
    }
}
