//! Username/password credentials for Basic-Auth and session login.

use crate::error::{Error, ErrorKind, Result};

/// A Jamf Pro account's username and password.
///
/// Used to fetch bearer tokens, to log in to session-based endpoints and to
/// authenticate file uploads. The password is redacted in Debug output.
#[derive(Clone)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicCredentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from `JAMF_USERNAME` and `JAMF_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let username = std::env::var("JAMF_USERNAME").map_err(|_| {
            Error::new(ErrorKind::Config(
                "JAMF_USERNAME environment variable not set".to_string(),
            ))
        })?;
        let password = std::env::var("JAMF_PASSWORD").map_err(|_| {
            Error::new(ErrorKind::Config(
                "JAMF_PASSWORD environment variable not set".to_string(),
            ))
        })?;

        Ok(Self::new(username, password))
    }

    /// The username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = BasicCredentials::new("admin", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_accessors() {
        let creds = BasicCredentials::new("admin", "hunter2");
        assert_eq!(creds.username(), "admin");
        assert_eq!(creds.password(), "hunter2");
    }
}
