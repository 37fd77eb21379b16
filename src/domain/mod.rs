//! Domain Layer
//!
//! Contains the instance metadata model and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::metadata_source::MetadataSource;
pub use models::instance::{InstanceMetadata, InstanceSummary};
