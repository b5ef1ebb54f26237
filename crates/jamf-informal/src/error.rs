//! Error types for jamf-pro-informal.

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

    pub(crate) fn client(operation: &'static str, err: jamf_pro_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client {
                operation,
                message: err.to_string(),
            },
            source: Some(Box::new(err)),
        }
    }

    /// The underlying base client error, if any.
    pub fn client_error(&self) -> Option<&jamf_pro_client::Error> {
        self.source.as_ref()?.downcast_ref()
    }

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

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Other(String),
}

impl From<jamf_pro_client::Error> for Error {
    fn from(err: jamf_pro_client::Error) -> Self {
        Self::client("client", err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            kind: ErrorKind::InvalidUrl(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
