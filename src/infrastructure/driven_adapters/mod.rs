//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Instance metadata clients
//! - Configuration

pub mod config;
pub mod metadata_client;

pub use config::AppConfig;
pub use metadata_client::AzureMetadataClient;
