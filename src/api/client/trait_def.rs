//! Client trait definition
//!
//! This module defines the `MigrationApi` trait that abstracts over client
//! implementations, so consumers can substitute a mock for the HTTP client in
//! their own tests.

use super::ClientError;
use crate::models::{ClientId, ClientRecord, MigrationOutcome};

/// Trait defining the API client interface for the migration service
///
/// Every operation is one stateless request/response round trip. Calls are
/// independent: concurrent invocations have no ordering guarantee and do not
/// affect one another.
#[async_trait::async_trait]
pub trait MigrationApi {
    /// List clients that have not been migrated yet
    async fn legacy_clients(&self) -> Result<Vec<ClientRecord>, ClientError>;

    /// List clients that have been migrated
    async fn new_clients(&self) -> Result<Vec<ClientRecord>, ClientError>;

    /// Trigger migration of the client identified by `id`
    ///
    /// The identifier is inserted verbatim into the request path.
    async fn migrate_client(&self, id: &ClientId) -> Result<MigrationOutcome, ClientError>;
}
