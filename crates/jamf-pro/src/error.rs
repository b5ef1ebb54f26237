//! Error types for jamf-pro-rest.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
    }

    /// Wrap a base client error raised while running `operation`.
    pub(crate) fn client(operation: &'static str, err: jamf_pro_client::Error) -> Self {
        let kind = match &err.kind {
            jamf_pro_client::ErrorKind::Json(message) => {
                ErrorKind::Json(format!("{operation}: {message}"))
            }
            _ => ErrorKind::Client {
                operation,
                message: err.to_string(),
            },
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }

    /// The underlying base client error, if any.
    pub fn client_error(&self) -> Option<&jamf_pro_client::Error> {
        self.source.as_ref()?.downcast_ref()
    }

    /// The HTTP status the server answered with, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        self.client_error()?.status()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("{operation}: {message}")]
    Client {
        operation: &'static str,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// A timestamp returned by the server could not be parsed.
    #[error("Invalid timestamp: {0}")]
    Timestamp(String),

    #[error("{0}")]
    Other(String),
}

impl From<jamf_pro_client::Error> for Error {
    fn from(err: jamf_pro_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client {
                operation: "client",
                message: err.to_string(),
            },
            source: Some(Box::new(err)),
        }
    }
}
