//! # jamf-pro-rest
//!
//! Client for the Jamf Pro API, the JSON API served under `/api`.
//!
//! ## Features
//!
//! - **Authentication** - exchange Basic credentials for a bearer token
//! - **Categories** - CRUD plus bulk delete
//! - **Scripts** - CRUD with script contents and parameters
//! - **Icons** - Self Service icon upload, metadata and download
//! - **SSO failover** - read or regenerate the failover login URL
//!
//! List endpoints take [`ListOptions`] for paging, sorting and RSQL filters.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_rest::{BasicCredentials, JamfProClient, ListOptions, Script};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = JamfProClient::new("https://example.jamfcloud.com")?;
//!     let token = client.authenticate(&BasicCredentials::from_env()?).await?;
//!     println!("token expires at {:?}", token.expires_at()?);
//!
//!     let id = client
//!         .create_script(&Script::new("hello.sh", "#!/bin/sh\necho hello"))
//!         .await?;
//!     let scripts = client.list_scripts(&ListOptions::new().page_size(50)).await?;
//!     println!("created {id}, {} scripts total", scripts.total_count.unwrap_or(0));
//!     Ok(())
//! }
//! ```

mod auth;
mod categories;
mod client;
mod error;
mod icon;
mod list;
mod scripts;
mod sso_failover;

pub use auth::AuthToken;
pub use categories::{Category, CategoryList};
pub use client::JamfProClient;
pub use error::{Error, ErrorKind, Result};
pub use icon::{Icon, IconDownloadOptions, IconResolution};
pub use list::ListOptions;
pub use scripts::{Script, ScriptList, ScriptPriority};
pub use sso_failover::SsoFailover;

// Re-export jamf-pro-client types that users might need
pub use jamf_pro_client::{BasicCredentials, ClientConfig, ClientConfigBuilder, Response, RetryConfig};
