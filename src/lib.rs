//! Migration client library crate
//!
//! Async API client for the client-migration service. The service exposes
//! three endpoints under an `/api` prefix: two client listings
//! (`GET /legacy-clients`, `GET /new-clients`) and a migration trigger
//! (`POST /migrate/{id}`). [`HttpClient`] wraps them behind one immutable,
//! explicitly injected configuration; every request carries
//! `Content-Type: application/json`.
//!
//! The client adds no policy of its own: no retries, no caching, no timeouts,
//! no cancellation. Failures surface to the caller as [`ClientError`] with
//! the transport's own classification.
//!
//! # Example
//!
//! ```no_run
//! use migration_client::{ClientConfig, ClientId, HttpClient, MigrationApi};
//!
//! # async fn run() -> Result<(), migration_client::ClientError> {
//! let client = HttpClient::with_config(ClientConfig::new("http://localhost:8080/api"));
//!
//! let pending = client.legacy_clients().await?;
//! for record in &pending {
//!     client.migrate_client(&ClientId::from(record.id)).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod models;

// Re-export commonly used types at the crate root
pub use api::client::{ClientConfig, ClientError, HttpClient, MigrationApi};
pub use models::{ClientId, ClientRecord, MigrationOutcome};
