use std::sync::RwLock;

use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};


/// The last known geolocation of the server host.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GeoRecord {
    /// The public IP address.
    pub ip: String,
    pub city: String,
    pub country: String,
    /// When the record was fetched. Serialized as RFC 3339.
    pub last_updated: DateTime<Utc>,
}

/// The raw geolocation API response.
#[derive(Debug, Deserialize)]
pub struct GeoApiResponse {
    /// The queried IP address.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    /// `success` or `fail`.
    pub status: String,
}

/// Holder of the most recently fetched server geolocation.
///
/// The record is only ever swapped as a whole, so readers see either the
/// initial empty record or one complete lookup result.
#[derive(Debug, Default)]
pub struct ServerIpCache {
    record: RwLock<GeoRecord>,
}

impl ServerIpCache {
    pub fn new() -> ServerIpCache {
        ServerIpCache {
            record: RwLock::new(GeoRecord::default()),
        }
    }

    /// Replace the cached record.
    /// # Arguments
    /// * `record` - The new record.
    pub fn replace(&self, record: GeoRecord) {
        match self.record.write() {
            Ok(mut current) => *current = record,
            Err(poisoned) => *poisoned.into_inner() = record,
        }
    }

    /// Get a snapshot of the cached record.
    pub fn current(&self) -> GeoRecord {
        match self.record.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// The health status of the application.
pub struct HealthStatus {
    /// Whether the last geolocation lookup succeeded.
    pub upstream_status: bool,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthStatus {
    pub fn new() -> HealthStatus {
        HealthStatus {
            upstream_status: true,
        }
    }
    pub fn healthy(&self) -> bool {
        self.upstream_status
    }
}
