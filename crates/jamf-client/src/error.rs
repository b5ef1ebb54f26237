//! Error types for jamf-client.

use std::time::Duration;

/// Result type alias for jamf-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for jamf-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the baseline transport policy would retry this error.
    ///
    /// Only connection failures and timeouts qualify. Status-based retries
    /// are decided on the response itself, see [`crate::RetryConfig`].
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// The upstream HTTP status, if this error came from response validation.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::UnexpectedStatus { status, .. }
            | ErrorKind::UnexpectedStatusNoBody { status }
            | ErrorKind::UnexpectedStatusUnreadableBody { status } => Some(*status),
            _ => None,
        }
    }

    /// The (sanitized) response body text, if the server sent one.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::UnexpectedStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if the call was aborted by its deadline.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self.kind, ErrorKind::DeadlineExceeded(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The server answered with a status outside the accepted set.
    #[error("unexpected status {status} with response: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// As above, but the response carried no body at all.
    #[error("unexpected status {status} received with no body")]
    UnexpectedStatusNoBody { status: u16 },

    /// As above, but reading the body failed.
    #[error("unexpected status {status}, could not read response body")]
    UnexpectedStatusUnreadableBody { status: u16 },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other failure inside the HTTP stack.
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// The per-call deadline expired before the exchange completed.
    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    /// The request could not be constructed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// XML serialization/deserialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl ErrorKind {
    /// Returns true if this error kind is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Timeout | ErrorKind::Connection(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_builder() {
            ErrorKind::InvalidRequest(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Error::with_source(ErrorKind::Xml(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        let err = Error::new(ErrorKind::Timeout);
        assert!(err.is_retryable());

        let err = Error::new(ErrorKind::Connection("refused".to_string()));
        assert!(err.is_retryable());

        let err = Error::new(ErrorKind::UnexpectedStatus {
            status: 503,
            body: "Service unavailable".to_string(),
        });
        assert!(!err.is_retryable());

        let err = Error::new(ErrorKind::DeadlineExceeded(Duration::from_secs(1)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_status_accessor() {
        let err = Error::new(ErrorKind::UnexpectedStatus {
            status: 500,
            body: "boom".into(),
        });
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.body(), Some("boom"));

        let err = Error::new(ErrorKind::UnexpectedStatusNoBody { status: 403 });
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), None);

        let err = Error::new(ErrorKind::UnexpectedStatusUnreadableBody { status: 502 });
        assert_eq!(err.status(), Some(502));

        assert_eq!(Error::new(ErrorKind::Timeout).status(), None);
    }

    #[test]
    fn test_error_kind_display_messages() {
        let cases: Vec<(ErrorKind, &str)> = vec![
            (
                ErrorKind::UnexpectedStatus {
                    status: 500,
                    body: "<html>oops</html>".into(),
                },
                "unexpected status 500 with response: <html>oops</html>",
            ),
            (
                ErrorKind::UnexpectedStatusNoBody { status: 403 },
                "unexpected status 403 received with no body",
            ),
            (
                ErrorKind::UnexpectedStatusUnreadableBody { status: 502 },
                "unexpected status 502, could not read response body",
            ),
            (ErrorKind::Timeout, "Request timeout"),
            (
                ErrorKind::Connection("refused".into()),
                "Connection error: refused",
            ),
            (
                ErrorKind::DeadlineExceeded(Duration::from_millis(250)),
                "Deadline of 250ms exceeded",
            ),
            (
                ErrorKind::InvalidRequest("GET cannot carry a body".into()),
                "Invalid request: GET cannot carry a body",
            ),
            (ErrorKind::Xml("bad tag".into()), "XML error: bad tag"),
            (
                ErrorKind::InvalidUrl("no scheme".into()),
                "Invalid URL: no scheme",
            ),
            (
                ErrorKind::Config("missing field".into()),
                "Configuration error: missing field",
            ),
            (ErrorKind::Other("something else".into()), "something else"),
        ];

        for (kind, expected_substring) in cases {
            let display = kind.to_string();
            assert!(
                display.contains(expected_substring),
                "Expected '{display}' to contain '{expected_substring}'"
            );
        }
    }

    #[test]
    fn test_error_with_source() {
        let source_err = std::io::Error::other("disk full");
        let err = Error::with_source(ErrorKind::Other("write failed".into()), source_err);

        assert!(err.source.is_some());
        assert_eq!(err.to_string(), "write failed");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)));
    }
}
