//! Metadata Client Adapters

mod azure;

pub use azure::AzureMetadataClient;
