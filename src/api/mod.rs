//! API module
//!
//! This module provides the client-side API surface for the migration
//! service: the HTTP client, its configuration, and the client trait.

pub mod client;

// Re-export commonly used types
pub use client::{ClientConfig, ClientError, HttpClient, MigrationApi};
