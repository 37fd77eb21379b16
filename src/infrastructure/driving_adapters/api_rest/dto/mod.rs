//! Data Transfer Objects
//!
//! Response DTOs for the REST API.

pub mod instance;

pub use instance::InstanceSummaryDto;
