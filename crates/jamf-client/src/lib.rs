//! # jamf-pro-client
//!
//! Core HTTP transport shared by every Jamf Pro API surface.
//!
//! This crate provides the base client with:
//! - URL construction for the classic (`/JSSResource`), Jamf Pro (`/api`) and
//!   session-based (server root) families
//! - Bearer token handling and a per-call request hook
//! - Status validation with distinct errors for empty and unreadable bodies
//! - Retry on HTTP 424, caller-defined consistency failures and transient
//!   transport failures, with exponential backoff
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource Layer                           │
//! │  (jamf-pro-classic, jamf-pro-rest, jamf-pro-informal)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      BaseClient                             │
//! │  - Endpoint + family prefix                                 │
//! │  - Authorization token, retry toggle                        │
//! │  - execute(RequestSpec) -> Response                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          RetryConfig / RetryPolicy, Response::validate       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use jamf_pro_client::{ApiFamily, BaseClient, retry_on_not_found};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jamf_pro_client::Error> {
//!     let mut client = BaseClient::new("https://example.jamfcloud.com", ApiFamily::Classic)?;
//!     client.set_authorization_token("eyJhbGciOi...");
//!
//!     let xml = client
//!         .execute(
//!             client
//!                 .get("/computergroups/id/1")
//!                 .valid_status_codes([200])
//!                 .consistency_failure(retry_on_not_found),
//!         )
//!         .await?
//!         .text()
//!         .await?;
//!
//!     println!("{xml}");
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod error;
mod macros;
mod request;
mod response;
mod retry;
mod uri;
pub mod xml;

pub use client::BaseClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::BasicCredentials;
pub use error::{Error, ErrorKind, Result};
pub use request::{
    retry_on_not_found, set_basic_auth, MultipartBuilder, RequestMethod, RequestMiddleware,
    RequestSpec, ResponsePredicate,
};
pub use response::Response;
pub use retry::{BackoffStrategy, FailedDependencyRetry, RetryConfig, RetryPolicy};
pub use uri::{ApiFamily, Endpoint, Uri, JSON_CONTENT_TYPE, XML_CONTENT_TYPE};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("jamf-pro-api/", env!("CARGO_PKG_VERSION"));

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
