//! HTTP response wrapper and status validation.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use regex_lite::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::warn;

use crate::error::{Error, ErrorKind, Result};
use crate::request::ResponsePredicate;
use crate::xml;

/// Maximum length of response body text embedded in errors.
const MAX_ERROR_BODY_LENGTH: usize = 2000;

/// Credential patterns redacted from error bodies.
static REDACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)bearer\s+[A-Za-z0-9\-_.=]+", "Bearer [REDACTED]"),
        (r#"("token"\s*:\s*")[^"]*""#, "${1}[REDACTED]\""),
        (r"(?i)(password=)[^&\s]*", "${1}[REDACTED]"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Some((Regex::new(pattern).ok()?, replacement)))
    .collect()
});

/// A received response whose body has not been read yet.
///
/// Reading the body consumes the response; dropping it releases the
/// connection. Either way the body is released exactly once.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// All response headers.
    pub fn headers(&self) -> &reqwest::header::HeaderMap {
        self.inner.headers()
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Content length, when the server announced one.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// The final URL of the response.
    pub fn url(&self) -> &url::Url {
        self.inner.url()
    }

    /// Get the Retry-After header as a Duration.
    ///
    /// Accepts both delay-seconds and an HTTP date. A date in the past
    /// yields a zero delay.
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.header("retry-after")?.trim();
        if let Ok(seconds) = value.parse::<u64>() {
            return Some(Duration::from_secs(seconds));
        }
        let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
        Some((at - Utc::now()).to_std().unwrap_or(Duration::ZERO))
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Read the next chunk of the body, for streaming downloads.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        self.inner.chunk().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }

    /// Deserialize the response body as XML.
    pub async fn xml<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.bytes().await?;
        xml::from_slice(&body)
    }

    /// Get access to the inner reqwest::Response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }

    /// Classify the response against the accepted status set.
    ///
    /// On success the body is left untouched for the caller. On failure the
    /// body is read once, dropped, and its text embedded in the error.
    pub async fn validate(
        self,
        valid_status_codes: &[u16],
        valid_status: Option<&ResponsePredicate>,
    ) -> Result<Response> {
        let status = self.status();

        if valid_status_codes.contains(&status) {
            return Ok(self);
        }
        if valid_status.is_some_and(|predicate| predicate(&self)) {
            return Ok(self);
        }

        Err(self.into_status_error().await)
    }

    async fn into_status_error(self) -> Error {
        let status = self.status();

        match self.inner.bytes().await {
            Err(err) => {
                warn!(status, error = %err, "Failed to drain response body");
                Error::with_source(ErrorKind::UnexpectedStatusUnreadableBody { status }, err)
            }
            Ok(body) if body.is_empty() => {
                Error::new(ErrorKind::UnexpectedStatusNoBody { status })
            }
            Ok(body) => Error::new(ErrorKind::UnexpectedStatus {
                status,
                body: sanitize_error_message(&String::from_utf8_lossy(&body)),
            }),
        }
    }
}

/// Redact credentials that may be echoed in error bodies and cap the length.
pub(crate) fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = message.to_string();
    for (re, replacement) in REDACTIONS.iter() {
        sanitized = re.replace_all(&sanitized, *replacement).into_owned();
    }

    if sanitized.len() > MAX_ERROR_BODY_LENGTH {
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
