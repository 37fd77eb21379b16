//! Instance Metadata API
//!
//! A Rust-based microservice that reads the cloud instance metadata endpoint
//! and re-exposes VM name, availability zone and private IP, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
