//! Jamf Pro API client.
//!
//! This client wraps `BaseClient` from `jamf-pro-client` and provides typed
//! methods for the JSON resources under `/api`.

use jamf_pro_client::{ApiFamily, BaseClient, ClientConfig, RequestSpec, Response};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

mod auth;
mod categories;
mod icon;
mod scripts;
mod sso_failover;

/// Jamf Pro API client.
///
/// Provides typed methods for:
/// - Bearer token acquisition with Basic credentials
/// - Categories and scripts CRUD, with paging, sorting and RSQL filters
/// - Self Service icon upload and download
/// - SSO failover URL lookup and regeneration
///
/// # Example
///
/// ```rust,ignore
/// use jamf_pro_rest::{BasicCredentials, Category, JamfProClient, ListOptions};
///
/// let mut client = JamfProClient::new("https://example.jamfcloud.com")?;
/// client.authenticate(&BasicCredentials::from_env()?).await?;
///
/// let id = client.create_category(&Category::new("Apps", 9)).await?;
/// let page = client
///     .list_categories(&ListOptions::new().sort("name:asc"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct JamfProClient {
    client: BaseClient,
}

impl JamfProClient {
    /// Create a client for the server at `server_url`.
    pub fn new(server_url: &str) -> Result<Self> {
        let client = BaseClient::new(server_url, ApiFamily::JamfPro)?;
        Ok(Self { client })
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(server_url: &str, config: ClientConfig) -> Result<Self> {
        let client = BaseClient::with_config(server_url, ApiFamily::JamfPro, config)?;
        Ok(Self { client })
    }

    /// Create a Jamf Pro client from an existing `BaseClient`.
    pub fn from_client(client: BaseClient) -> Self {
        Self { client }
    }

    /// Get the underlying `BaseClient`.
    pub fn inner(&self) -> &BaseClient {
        &self.client
    }

    /// Get mutable access to the underlying `BaseClient`.
    pub fn inner_mut(&mut self) -> &mut BaseClient {
        &mut self.client
    }

    /// Replace the bearer token sent with every request.
    pub fn set_authorization_token(&mut self, token: impl Into<String>) {
        self.client.set_authorization_token(token);
    }

    /// Turn automatic retries off or back on for every later request.
    pub fn set_retries_disabled(&mut self, disabled: bool) {
        self.client.set_retries_disabled(disabled);
    }

    async fn send(&self, operation: &'static str, spec: RequestSpec) -> Result<Response> {
        self.client
            .execute(spec)
            .await
            .map_err(|e| Error::client(operation, e))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        spec: RequestSpec,
    ) -> Result<T> {
        self.send(operation, spec)
            .await?
            .json()
            .await
            .map_err(|e| Error::client(operation, e))
    }
}

#[cfg(test)]
pub(crate) fn test_client(server_url: &str) -> JamfProClient {
    use jamf_pro_client::RetryConfig;
    use std::time::Duration;

    let config = ClientConfig::builder()
        .with_retry(
            RetryConfig::default()
                .with_max_attempts(3)
                .with_initial_delay(Duration::from_millis(5))
                .with_max_delay(Duration::from_millis(20)),
        )
        .build();
    let mut client = JamfProClient::with_config(server_url, config).unwrap();
    client.set_authorization_token("test-token");
    client
}
