use jamf_pro_client::{Response, Uri};
use tracing::{debug, instrument};

use crate::error::{Error, Result};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl super::InformalClient {
    /// Log in through the web login form.
    ///
    /// Only the path and query of `login_url` are used; the request goes to
    /// this client's server. Success is the `302` redirect the form answers
    /// with. The session cookie it sets is kept for later calls.
    #[instrument(skip(self), fields(username = %self.credentials.username()))]
    pub async fn create_session(&self, login_url: &str) -> Result<Response> {
        let url = self.client.endpoint().base_url().join(login_url)?;

        // Path segments come back percent-encoded and are encoded again on send.
        let mut entity = String::new();
        for segment in url.path_segments().into_iter().flatten() {
            let segment = urlencoding::decode(segment)
                .map_err(|e| Error::validation(format!("invalid login path: {}", e)))?;
            entity.push('/');
            entity.push_str(&segment);
        }
        let uri = Uri::new(entity).params(url.query_pairs().into_owned());
        let form = serde_urlencoded::to_string([
            ("username", self.credentials.username()),
            ("password", self.credentials.password()),
        ])
        .map_err(|e| Error::validation(format!("cannot encode login form: {}", e)))?;

        let spec = self
            .client
            .post(uri)
            .content_type(FORM_CONTENT_TYPE)
            .body(form)
            .valid_status_codes([302]);

        let response = self
            .client
            .execute(spec)
            .await
            .map_err(|e| Error::client("Session.create", e))?;
        debug!(location = ?response.header("location"), "Session created");
        Ok(response)
    }
}
