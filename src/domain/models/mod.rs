//! Domain Models

pub mod instance;

pub use instance::{
    ComputeMetadata, InstanceMetadata, InstanceSummary, IpAddress, NetworkData, NetworkInterface,
    NetworkMetadata, Subnet,
};
