//! Wire types for the client-migration API
//!
//! These mirror the payloads served by the migration backend: client listings
//! on the two `GET` endpoints and the acknowledgement body returned when a
//! migration is triggered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A client known to the migration service.
///
/// `migrated` distinguishes the two listings: `false` for entries returned by
/// the legacy listing, `true` once a migration has completed. Servers that
/// omit the field are treated as reporting an unmigrated client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub migrated: bool,
}

/// Opaque identifier accepted by the migrate operation.
///
/// The token is inserted verbatim into the request path; no shape validation
/// or escaping is applied. Callers are responsible for supplying identifiers
/// that form a valid URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ClientId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Acknowledgement body returned by the migrate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationOutcome {
    pub status: String,
}
