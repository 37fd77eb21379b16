//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (metadata client, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
