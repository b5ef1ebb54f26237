//! The base client: request execution with retry and response validation.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestMethod, RequestSpec};
use crate::response::Response;
use crate::retry::RetryPolicy;
use crate::uri::{ApiFamily, Endpoint, Uri};

/// HTTP transport shared by every Jamf API surface.
///
/// Holds the endpoint, the optional bearer credential and the retry
/// configuration. Cloning is cheap and clones share the connection pool.
///
/// ## Credential and retry toggle
///
/// [`set_authorization_token`](Self::set_authorization_token) and
/// [`set_retries_disabled`](Self::set_retries_disabled) take `&mut self`.
/// A client shared between tasks must be wrapped in the caller's own lock
/// (or cloned per task) to rotate the token while calls are in flight.
#[derive(Clone)]
pub struct BaseClient {
    http: reqwest::Client,
    endpoint: Endpoint,
    config: ClientConfig,
    authorization_token: Option<String>,
}

impl std::fmt::Debug for BaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseClient")
            .field("endpoint", &self.endpoint.base_url().as_str())
            .field(
                "authorization_token",
                &self.authorization_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("retries_disabled", &self.config.retry.disabled)
            .finish_non_exhaustive()
    }
}

impl BaseClient {
    /// Create a client for `base_url` with default configuration.
    pub fn new(base_url: &str, family: ApiFamily) -> Result<Self> {
        Self::with_config(base_url, family, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// Fails if `base_url` is not an absolute http(s) URL.
    pub fn with_config(base_url: &str, family: ApiFamily, config: ClientConfig) -> Result<Self> {
        let endpoint = Endpoint::new(base_url, family)?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true);

        if !config.follow_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        if config.cookie_store {
            builder = builder.cookie_store(true);
        }

        let http = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            http,
            endpoint,
            config,
            authorization_token: None,
        })
    }

    /// The endpoint requests are resolved against.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Attach `token` as `Authorization: Bearer` to every following call.
    pub fn set_authorization_token(&mut self, token: impl Into<String>) {
        self.authorization_token = Some(token.into());
    }

    /// Stop sending a bearer token.
    pub fn clear_authorization_token(&mut self) {
        self.authorization_token = None;
    }

    /// Returns true if a bearer token is set.
    pub fn has_authorization_token(&self) -> bool {
        self.authorization_token.is_some()
    }

    /// Turn retries off (or back on) for following calls.
    pub fn set_retries_disabled(&mut self, disabled: bool) {
        self.config.retry.disabled = disabled;
    }

    /// Returns true if retries are disabled.
    pub fn retries_disabled(&self) -> bool {
        self.config.retry.disabled
    }

    /// Start a GET request.
    pub fn get(&self, uri: impl Into<Uri>) -> RequestSpec {
        RequestSpec::new(RequestMethod::Get, uri)
    }

    /// Start a POST request.
    pub fn post(&self, uri: impl Into<Uri>) -> RequestSpec {
        RequestSpec::new(RequestMethod::Post, uri)
    }

    /// Start a PUT request.
    pub fn put(&self, uri: impl Into<Uri>) -> RequestSpec {
        RequestSpec::new(RequestMethod::Put, uri)
    }

    /// Start a PATCH request.
    pub fn patch(&self, uri: impl Into<Uri>) -> RequestSpec {
        RequestSpec::new(RequestMethod::Patch, uri)
    }

    /// Start a DELETE request.
    pub fn delete(&self, uri: impl Into<Uri>) -> RequestSpec {
        RequestSpec::new(RequestMethod::Delete, uri)
    }

    /// Perform one call: build, send with retries, validate.
    ///
    /// On success the response body is still unread. On failure the body has
    /// been drained and the error carries the status and body text.
    #[instrument(skip(self, spec), fields(method = %spec.method, entity = %spec.uri.entity))]
    pub async fn execute(&self, spec: RequestSpec) -> Result<Response> {
        spec.check()?;
        let url = self.endpoint.url_for(&spec.uri);
        let request = self.build_request(&spec, url)?;

        let call = async {
            let response = self.send_with_retry(request, &spec).await?;
            response
                .validate(&spec.valid_status_codes, spec.valid_status.as_ref())
                .await
        };

        match spec.deadline {
            Some(deadline) => tokio::time::timeout(deadline, call)
                .await
                .map_err(|_| Error::new(ErrorKind::DeadlineExceeded(deadline)))?,
            None => call.await,
        }
    }

    fn build_request(&self, spec: &RequestSpec, url: url::Url) -> Result<reqwest::Request> {
        let mut request = reqwest::Request::new(spec.method.to_reqwest(), url);

        // Multipart forms set their own Content-Type with the boundary.
        if spec.multipart.is_none() {
            let content_type = spec
                .content_type
                .as_deref()
                .unwrap_or(self.endpoint.family().default_content_type());
            let content_type = HeaderValue::from_str(content_type).map_err(|e| {
                Error::with_source(
                    ErrorKind::InvalidRequest(format!("invalid content type '{}'", content_type)),
                    e,
                )
            })?;
            request.headers_mut().insert(CONTENT_TYPE, content_type);
        }

        if let Some(token) = &self.authorization_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                Error::with_source(
                    ErrorKind::InvalidRequest(
                        "authorization token is not a valid header value".to_string(),
                    ),
                    e,
                )
            })?;
            value.set_sensitive(true);
            request.headers_mut().insert(AUTHORIZATION, value);
        }

        if spec.method.has_body() && spec.multipart.is_none() {
            let body = spec.body.clone().unwrap_or_default();
            *request.body_mut() = Some(reqwest::Body::from(body));
        }

        if let Some(middleware) = &spec.middleware {
            middleware(&mut request);
        }

        Ok(request)
    }

    async fn send_with_retry(&self, request: reqwest::Request, spec: &RequestSpec) -> Result<Response> {
        let retry = &self.config.retry;
        let mut policy = RetryPolicy::new(retry.clone());

        loop {
            let attempt = self.attempt_request(&request, spec)?;
            let outcome = self.send_once(attempt).await;

            if !retry.should_retry(&outcome, spec.consistency_failure.as_ref()) {
                return outcome;
            }

            let retry_after = outcome.as_ref().ok().and_then(Response::retry_after);
            let Some(delay) = policy.next_delay(retry_after) else {
                return outcome;
            };

            match &outcome {
                Ok(response) => warn!(
                    attempt = policy.attempt(),
                    delay_ms = delay.as_millis(),
                    status = response.status(),
                    "Request failed, retrying"
                ),
                Err(err) => warn!(
                    attempt = policy.attempt(),
                    delay_ms = delay.as_millis(),
                    error = %err,
                    "Request failed, retrying"
                ),
            }

            // Release the previous response before sleeping.
            drop(outcome);
            tokio::time::sleep(delay).await;
        }
    }

    /// A sendable copy of `request` for one attempt.
    fn attempt_request(
        &self,
        request: &reqwest::Request,
        spec: &RequestSpec,
    ) -> Result<reqwest::Request> {
        let Some(build_form) = &spec.multipart else {
            return request.try_clone().ok_or_else(|| {
                Error::new(ErrorKind::InvalidRequest(
                    "request body cannot be replayed".to_string(),
                ))
            });
        };

        let form = build_form()?;
        let attempt = self
            .http
            .request(request.method().clone(), request.url().clone())
            .headers(request.headers().clone())
            .multipart(form)
            .build()?;
        Ok(attempt)
    }

    async fn send_once(&self, request: reqwest::Request) -> Result<Response> {
        if self.config.enable_tracing {
            debug!(method = %request.method(), url = %request.url(), "Sending request");
        }

        let response = self.http.execute(request).await?;

        if self.config.enable_tracing {
            debug!(
                status = response.status().as_u16(),
                content_length = response.content_length(),
                "Response received"
            );
        }

        Ok(Response::new(response))
    }
}
