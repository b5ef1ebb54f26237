//! # jamf-pro-classic
//!
//! Jamf Pro Classic API client. The Classic API speaks XML under
//! `/JSSResource`.
//!
//! ## Features
//!
//! - **Computer groups** - static and smart groups with criteria
//! - **Computer extension attributes** - script, text field and pop-up menu inputs
//! - **macOS configuration profiles** - general settings, scope, Self Service
//! - **Packages** - package metadata records
//! - **Policies** - every policy section, from triggers to disk encryption
//!
//! Enumerated string fields are Rust enums with an `Other(String)` variant,
//! so values this crate does not know survive a get-then-update.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_classic::{ClassicClient, Policy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamf_pro_classic::Error> {
//!     let mut client = ClassicClient::new("https://example.jamfcloud.com")?;
//!     client.set_authorization_token("eyJhbGciOi...");
//!
//!     let id = client.create_policy(&Policy::named("Inventory")).await?;
//!     let policy = client.get_policy(id).await?;
//!     println!("{:?}", policy.general);
//!
//!     for summary in client.list_packages().await?.packages {
//!         println!("{:?} {:?}", summary.id, summary.name);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod common;
mod computer_extension_attributes;
mod computer_groups;
mod error;
mod osx_configuration_profiles;
mod packages;
mod policies;

pub use client::ClassicClient;
pub use common::*;
pub use computer_extension_attributes::*;
pub use computer_groups::*;
pub use error::{Error, ErrorKind, Result};
pub use osx_configuration_profiles::*;
pub use packages::*;
pub use policies::*;

// Re-export jamf-pro-client types that users might need
pub use jamf_pro_client::{BasicCredentials, ClientConfig, ClientConfigBuilder, RetryConfig};
