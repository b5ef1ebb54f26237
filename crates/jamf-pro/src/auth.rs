//! Bearer token types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// Token returned by `POST /v1/auth/token`.
///
/// The token is redacted in Debug output.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Expiry as an RFC 3339 timestamp, e.g. `2024-03-26T08:04:24.245Z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("expires", &self.expires)
            .finish()
    }
}

impl AuthToken {
    /// The parsed expiry, or `None` when the server sent none.
    pub fn expires_at(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(expires) = self.expires.as_deref() else {
            return Ok(None);
        };
        DateTime::parse_from_rfc3339(expires)
            .map(|parsed| Some(parsed.with_timezone(&Utc)))
            .map_err(|e| {
                Error {
                    kind: ErrorKind::Timestamp(format!("expires '{}': {}", expires, e)),
                    source: Some(Box::new(e)),
                }
            })
    }

    /// Whether the token expires before `now + margin`.
    ///
    /// A token without a parseable expiry is treated as expired.
    pub fn expires_within(&self, margin: chrono::Duration) -> bool {
        match self.expires_at() {
            Ok(Some(expires)) => expires <= Utc::now() + margin,
            _ => true,
        }
    }
}
