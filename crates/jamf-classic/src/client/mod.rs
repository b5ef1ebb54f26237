//! Jamf Pro Classic API client.
//!
//! This client wraps `BaseClient` from `jamf-pro-client` and provides typed
//! CRUD methods for the XML resources under `/JSSResource`.

use jamf_pro_client::{retry_on_not_found, ApiFamily, BaseClient, ClientConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::CreatedId;
use crate::error::{Error, Result};

mod computer_extension_attributes;
mod computer_groups;
mod osx_configuration_profiles;
mod packages;
mod policies;

/// Jamf Pro Classic API client.
///
/// Every resource exposes the same five operations:
/// - create: `POST <path>/id/0`, returns the new id
/// - get: `GET <path>/id/N`
/// - list: `GET <path>`
/// - update: `PUT <path>/id/N`
/// - delete: `DELETE <path>/id/N`
///
/// Get, update and delete retry on 404 since freshly created records take a
/// moment to become visible.
///
/// # Example
///
/// ```rust,ignore
/// use jamf_pro_classic::{ClassicClient, ComputerGroup};
///
/// let mut client = ClassicClient::new("https://example.jamfcloud.com")?;
/// client.set_authorization_token(token);
///
/// let id = client
///     .create_computer_group(&ComputerGroup::new_static("Lab Macs"))
///     .await?;
/// let group = client.get_computer_group(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ClassicClient {
    client: BaseClient,
}

impl ClassicClient {
    /// Create a client for the server at `server_url`.
    pub fn new(server_url: &str) -> Result<Self> {
        let client = BaseClient::new(server_url, ApiFamily::Classic)?;
        Ok(Self { client })
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(server_url: &str, config: ClientConfig) -> Result<Self> {
        let client = BaseClient::with_config(server_url, ApiFamily::Classic, config)?;
        Ok(Self { client })
    }

    /// Create a Classic client from an existing `BaseClient`.
    ///
    /// The base client must have been built for [`ApiFamily::Classic`].
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

    async fn create_resource<T: Serialize>(
        &self,
        operation: &'static str,
        path: &str,
        root: &str,
        resource: &T,
    ) -> Result<i32> {
        let spec = self
            .client
            .post(format!("{}/id/0", path))
            .xml_body(root, resource)
            .map_err(|e| Error::client(operation, e))?
            .valid_status_codes([201]);

        let response = self
            .client
            .execute(spec)
            .await
            .map_err(|e| Error::client(operation, e))?;
        let created: CreatedId = response
            .xml()
            .await
            .map_err(|e| Error::client(operation, e))?;
        Ok(created.id)
    }

    async fn get_resource<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        id: i32,
    ) -> Result<T> {
        let spec = self
            .client
            .get(format!("{}/id/{}", path, id))
            .valid_status_codes([200])
            .consistency_failure(retry_on_not_found);

        let response = self
            .client
            .execute(spec)
            .await
            .map_err(|e| Error::client(operation, e))?;
        response.xml().await.map_err(|e| Error::client(operation, e))
    }

    async fn list_resources<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T> {
        let spec = self.client.get(path).valid_status_codes([200]);

        let response = self
            .client
            .execute(spec)
            .await
            .map_err(|e| Error::client(operation, e))?;
        response.xml().await.map_err(|e| Error::client(operation, e))
    }

    async fn update_resource<T: Serialize>(
        &self,
        operation: &'static str,
        path: &str,
        root: &str,
        id: i32,
        resource: &T,
    ) -> Result<()> {
        let spec = self
            .client
            .put(format!("{}/id/{}", path, id))
            .xml_body(root, resource)
            .map_err(|e| Error::client(operation, e))?
            .valid_status_codes([201])
            .consistency_failure(retry_on_not_found);

        self.client
            .execute(spec)
            .await
            .map_err(|e| Error::client(operation, e))?;
        Ok(())
    }

    async fn delete_resource(&self, operation: &'static str, path: &str, id: i32) -> Result<()> {
        let spec = self
            .client
            .delete(format!("{}/id/{}", path, id))
            .valid_status_codes([200])
            .consistency_failure(retry_on_not_found);

        self.client
            .execute(spec)
            .await
            .map_err(|e| Error::client(operation, e))?;
        Ok(())
    }
}

/// Checks that an update target carries an id.
fn require_id(id: Option<i32>, resource: &str) -> Result<i32> {
    id.ok_or_else(|| Error::validation(format!("cannot update {} without an id", resource)))
}

#[cfg(test)]
pub(crate) fn test_client(server_url: &str) -> ClassicClient {
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
    let mut client = ClassicClient::with_config(server_url, config).unwrap();
    client.set_authorization_token("test-token");
    client
}
