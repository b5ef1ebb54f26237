//! # jamf-pro-informal
//!
//! Jamf Pro endpoints that are not part of the Classic API or the Jamf Pro
//! API. They live at the server root and are driven the way the web console
//! drives them.
//!
//! ## Features
//!
//! - **Session** - log in through the web form and keep the session cookie
//! - **Distribution file upload** - push package, eBook and in-house app
//!   files to the default distribution point
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_informal::{BasicCredentials, FileType, InformalClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = InformalClient::new(
//!         "https://example.jamfcloud.com",
//!         BasicCredentials::from_env()?,
//!     )?;
//!
//!     let pkg = std::fs::read("Firefox.pkg")?;
//!     client
//!         .upload_distribution_file(FileType::Package, 31, "Firefox.pkg", pkg)
//!         .await?;
//!     Ok(())
//! }
//! ```

mod client;
mod distribution_file_upload;
mod error;

pub use client::InformalClient;
pub use distribution_file_upload::{Destination, FileType};
pub use error::{Error, ErrorKind, Result};

pub use jamf_pro_client::{BasicCredentials, ClientConfig, ClientConfigBuilder, Response, RetryConfig};
