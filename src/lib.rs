//! # jamf-pro-api
//!
//! A typed Jamf Pro API client library for Rust.
//!
//! Jamf Pro exposes three HTTP surfaces on the same server. This library
//! gives each one its own client on top of a shared transport that handles
//! authentication, status validation and retries.
//!
//! ## Security
//!
//! - Bearer tokens and passwords are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error bodies are sanitized before they are embedded in messages
//!
//! ## Crates
//!
//! - **jamf-pro-client** - Core HTTP transport: URL building, request hook, status validation, retry
//! - **jamf-pro-classic** - Classic API (`/JSSResource`, XML): computer groups, extension attributes, configuration profiles, packages, policies
//! - **jamf-pro-rest** - Jamf Pro API (`/api`, JSON): auth tokens, categories, scripts, icons, SSO failover
//! - **jamf-pro-informal** - Session-based endpoints: web login, distribution point file upload
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jamf_pro_api::{BasicCredentials, ClassicClient, JamfProClient};
//! use jamf_pro_api::classic::ComputerGroup;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = "https://example.jamfcloud.com";
//!
//!     // Exchange Basic credentials for a bearer token
//!     let mut pro = JamfProClient::new(url)?;
//!     let token = pro.authenticate(&BasicCredentials::from_env()?).await?;
//!
//!     // The Classic API accepts the same token
//!     let mut classic = ClassicClient::new(url)?;
//!     classic.set_authorization_token(token.token.clone().unwrap_or_default());
//!
//!     let id = classic
//!         .create_computer_group(&ComputerGroup::new_static("Lab Macs"))
//!         .await?;
//!     let group = classic.get_computer_group(id).await?;
//!     println!("{:?}", group.name);
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub use jamf_pro_client as client;

#[cfg(feature = "classic")]
pub use jamf_pro_classic as classic;

#[cfg(feature = "pro")]
pub use jamf_pro_rest as pro;

#[cfg(feature = "informal")]
pub use jamf_pro_informal as informal;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use jamf_pro_client::{ApiFamily, BaseClient, BasicCredentials, ClientConfig, RetryConfig};

#[cfg(feature = "classic")]
pub use jamf_pro_classic::ClassicClient;

#[cfg(feature = "pro")]
pub use jamf_pro_rest::JamfProClient;

#[cfg(feature = "informal")]
pub use jamf_pro_informal::InformalClient;
