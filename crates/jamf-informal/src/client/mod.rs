//! Client for the session-based Jamf Pro endpoints.

use jamf_pro_client::{ApiFamily, BaseClient, BasicCredentials, ClientConfig};

use crate::error::Result;

mod distribution_file_upload;
mod session;

/// Client for endpoints outside the documented APIs.
///
/// These endpoints are served from the server root and authenticate with a
/// web session or Basic credentials. The HTTP stack keeps cookies between
/// calls and does not follow redirects, so the login redirect is visible to
/// the caller.
///
/// # Example
///
/// ```rust,ignore
/// use jamf_pro_informal::{BasicCredentials, FileType, InformalClient};
///
/// let client = InformalClient::new(
///     "https://example.jamfcloud.com",
///     BasicCredentials::from_env()?,
/// )?;
/// client.create_session("https://example.jamfcloud.com/").await?;
/// client
///     .upload_distribution_file(FileType::Package, 31, "Firefox.pkg", bytes)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct InformalClient {
    client: BaseClient,
    credentials: BasicCredentials,
}

impl InformalClient {
    /// Create a client for the server at `server_url`.
    pub fn new(server_url: &str, credentials: BasicCredentials) -> Result<Self> {
        Self::with_config(server_url, credentials, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    ///
    /// Redirect following is turned off and the cookie store on, whatever
    /// `config` says.
    pub fn with_config(
        server_url: &str,
        credentials: BasicCredentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let config = ClientConfig {
            follow_redirects: false,
            cookie_store: true,
            ..config
        };
        let client = BaseClient::with_config(server_url, ApiFamily::Informal, config)?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Get the underlying `BaseClient`.
    pub fn inner(&self) -> &BaseClient {
        &self.client
    }

    /// Get mutable access to the underlying `BaseClient`.
    pub fn inner_mut(&mut self) -> &mut BaseClient {
        &mut self.client
    }

    /// The account used for login and uploads.
    pub fn credentials(&self) -> &BasicCredentials {
        &self.credentials
    }
}

#[cfg(test)]
pub(crate) fn test_client(server_url: &str) -> InformalClient {
    use jamf_pro_client::RetryConfig;
    use std::time::Duration;

    let config = ClientConfig::builder()
        .with_retry(
            RetryConfig::default()
                .with_max_attempts(2)
                .with_initial_delay(Duration::from_millis(5)),
        )
        .build();
    InformalClient::with_config(server_url, BasicCredentials::new("admin", "secret"), config)
        .unwrap()
}
