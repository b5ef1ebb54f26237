use jamf_pro_client::BasicCredentials;
use tracing::{debug, instrument};

use crate::auth::AuthToken;
use crate::error::{Error, ErrorKind, Result};

const TOKEN_PATH: &str = "/v1/auth/token";

impl super::JamfProClient {
    /// Exchange Basic credentials for a bearer token.
    ///
    /// The token is returned, not installed; see [`authenticate`](Self::authenticate).
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn token(&self, credentials: &BasicCredentials) -> Result<AuthToken> {
        let spec = self
            .client
            .post(TOKEN_PATH)
            .valid_status_codes([200])
            .basic_auth(credentials);

        self.send_json("ApiAuthentication.token", spec).await
    }

    /// Fetch a token and install it as the bearer credential for later calls.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn authenticate(&mut self, credentials: &BasicCredentials) -> Result<AuthToken> {
        let token = self.token(credentials).await?;
        let Some(value) = token.token.as_deref() else {
            return Err(Error::new(ErrorKind::Other(
                "token response did not contain a token".to_string(),
            )));
        };
        self.client.set_authorization_token(value);
        debug!(expires = ?token.expires, "Installed bearer token");
        Ok(token)
    }
}
