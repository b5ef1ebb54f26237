use tracing::instrument;

use crate::error::Result;
use crate::sso_failover::SsoFailover;

const PATH: &str = "/v1/sso/failover";

impl super::JamfProClient {
    /// Get the current SSO failover URL.
    #[instrument(skip(self))]
    pub async fn get_sso_failover(&self) -> Result<SsoFailover> {
        let spec = self.client.get(PATH).valid_status_codes([200]);
        self.send_json("SsoFailover.get", spec).await
    }

    /// Generate a new failover URL, invalidating the previous one.
    #[instrument(skip(self))]
    pub async fn generate_sso_failover(&self) -> Result<SsoFailover> {
        let spec = self
            .client
            .post(format!("{}/generate", PATH))
            .valid_status_codes([200]);
        self.send_json("SsoFailover.generate", spec).await
    }
}
