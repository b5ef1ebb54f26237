//! SSO failover types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The SSO failover login URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoFailover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_url: Option<String>,
    /// Epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_time: Option<i64>,
}

impl SsoFailover {
    /// When the URL was generated.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.generation_time?)
    }
}
