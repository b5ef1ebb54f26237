//! Per-call request description handed to the executor.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use bytes::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::Serialize;

use crate::credentials::BasicCredentials;
use crate::error::{Error, ErrorKind, Result};
use crate::response::Response;
use crate::uri::Uri;
use crate::xml;

/// Predicate over a received response.
///
/// Used both for the status-acceptance override and for the
/// consistency-failure test that drives retries.
pub type ResponsePredicate = Arc<dyn Fn(&Response) -> bool + Send + Sync>;

/// Hook that mutates the outgoing request after the default headers are set.
pub type RequestMiddleware = Arc<dyn Fn(&mut reqwest::Request) + Send + Sync>;

/// Builds a fresh `multipart/form-data` body for each attempt.
///
/// A `reqwest::multipart::Form` is consumed when sent and cannot be cloned,
/// so the retry loop asks for a new one every time.
pub type MultipartBuilder =
    Arc<dyn Fn() -> reqwest::Result<reqwest::multipart::Form> + Send + Sync>;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Whether requests with this method carry a body.
    pub fn has_body(&self) -> bool {
        matches!(
            self,
            RequestMethod::Post | RequestMethod::Put | RequestMethod::Patch
        )
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_reqwest().as_str())
    }
}

/// Everything the executor needs to perform one call.
///
/// Built fresh for each call:
///
/// ```rust,ignore
/// let spec = RequestSpec::delete(Uri::new("/computergroups/id/1"))
///     .valid_status_codes([200])
///     .consistency_failure(retry_on_not_found);
/// let response = client.execute(spec).await?;
/// ```
#[derive(Clone)]
pub struct RequestSpec {
    pub(crate) method: RequestMethod,
    pub(crate) uri: Uri,
    pub(crate) body: Option<Bytes>,
    pub(crate) multipart: Option<MultipartBuilder>,
    pub(crate) content_type: Option<String>,
    pub(crate) valid_status_codes: Vec<u16>,
    pub(crate) valid_status: Option<ResponsePredicate>,
    pub(crate) consistency_failure: Option<ResponsePredicate>,
    pub(crate) middleware: Option<RequestMiddleware>,
    pub(crate) deadline: Option<Duration>,
}

impl fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSpec")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .field("multipart", &self.multipart.is_some())
            .field("content_type", &self.content_type)
            .field("valid_status_codes", &self.valid_status_codes)
            .field("valid_status", &self.valid_status.is_some())
            .field("consistency_failure", &self.consistency_failure.is_some())
            .field("middleware", &self.middleware.is_some())
            .field("deadline", &self.deadline)
            .finish()
    }
}

impl RequestSpec {
    /// Create a request for the given method and URI.
    pub fn new(method: RequestMethod, uri: impl Into<Uri>) -> Self {
        Self {
            method,
            uri: uri.into(),
            body: None,
            multipart: None,
            content_type: None,
            valid_status_codes: Vec::new(),
            valid_status: None,
            consistency_failure: None,
            middleware: None,
            deadline: None,
        }
    }

    /// GET request.
    pub fn get(uri: impl Into<Uri>) -> Self {
        Self::new(RequestMethod::Get, uri)
    }

    /// POST request.
    pub fn post(uri: impl Into<Uri>) -> Self {
        Self::new(RequestMethod::Post, uri)
    }

    /// PUT request.
    pub fn put(uri: impl Into<Uri>) -> Self {
        Self::new(RequestMethod::Put, uri)
    }

    /// PATCH request.
    pub fn patch(uri: impl Into<Uri>) -> Self {
        Self::new(RequestMethod::Patch, uri)
    }

    /// DELETE request.
    pub fn delete(uri: impl Into<Uri>) -> Self {
        Self::new(RequestMethod::Delete, uri)
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The relative URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Set the raw body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as JSON and use it as the body.
    pub fn json_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(self.body(body))
    }

    /// Serialize `value` as XML under the `root` element and use it as the body.
    pub fn xml_body<T: Serialize>(self, root: &str, value: &T) -> Result<Self> {
        let body = xml::to_string_with_root(root, value)?;
        Ok(self.body(body))
    }

    /// Send a `multipart/form-data` body built by `build_form`.
    ///
    /// The closure runs once per attempt. The Content-Type with its boundary
    /// comes from the form, so no content type override applies.
    pub fn multipart<F>(mut self, build_form: F) -> Self
    where
        F: Fn() -> reqwest::Result<reqwest::multipart::Form> + Send + Sync + 'static,
    {
        self.multipart = Some(Arc::new(build_form));
        self
    }

    /// Override the family default content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Status codes treated as success.
    pub fn valid_status_codes(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.valid_status_codes = codes.into_iter().collect();
        self
    }

    /// Accept responses outside the status set when `predicate` returns true.
    pub fn valid_status<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Response) -> bool + Send + Sync + 'static,
    {
        self.valid_status = Some(Arc::new(predicate));
        self
    }

    /// Retry responses for which `predicate` returns true (eventual consistency).
    pub fn consistency_failure<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Response) -> bool + Send + Sync + 'static,
    {
        self.consistency_failure = Some(Arc::new(predicate));
        self
    }

    /// Mutate the request after Content-Type and bearer auth have been applied.
    pub fn middleware<F>(mut self, middleware: F) -> Self
    where
        F: Fn(&mut reqwest::Request) + Send + Sync + 'static,
    {
        self.middleware = Some(Arc::new(middleware));
        self
    }

    /// Replace the Authorization header with Basic credentials.
    pub fn basic_auth(self, credentials: &BasicCredentials) -> Self {
        let credentials = credentials.clone();
        self.middleware(move |request| set_basic_auth(request, &credentials))
    }

    /// Bound the whole call, retries and backoff included.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns true if `status` is in the accepted set.
    pub fn accepts(&self, status: u16) -> bool {
        self.valid_status_codes.contains(&status)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.body.is_some() && self.multipart.is_some() {
            return Err(Error::new(ErrorKind::InvalidRequest(
                "a request cannot carry both a raw and a multipart body".to_string(),
            )));
        }
        if (self.body.is_some() || self.multipart.is_some()) && !self.method.has_body() {
            return Err(Error::new(ErrorKind::InvalidRequest(format!(
                "{} requests cannot carry a body",
                self.method
            ))));
        }
        Ok(())
    }
}

/// Set `Authorization: Basic ...` on an outgoing request.
pub fn set_basic_auth(request: &mut reqwest::Request, credentials: &BasicCredentials) {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!(
        "{}:{}",
        credentials.username(),
        credentials.password()
    ));
    if let Ok(mut value) = HeaderValue::from_str(&format!("Basic {}", encoded)) {
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
    }
}

/// Consistency-failure predicate for resources that 404 right after creation.
pub fn retry_on_not_found(response: &Response) -> bool {
    response.status() == 404
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let spec = RequestSpec::put("/packages/id/3")
            .body("<package/>")
            .content_type("text/xml")
            .valid_status_codes([201])
            .consistency_failure(retry_on_not_found)
            .deadline(Duration::from_secs(5));

        assert_eq!(spec.method(), RequestMethod::Put);
        assert_eq!(spec.uri().entity, "/packages/id/3");
        assert_eq!(spec.body.as_deref(), Some(&b"<package/>"[..]));
        assert_eq!(spec.content_type.as_deref(), Some("text/xml"));
        assert!(spec.accepts(201));
        assert!(!spec.accepts(200));
        assert!(spec.consistency_failure.is_some());
        assert!(spec.valid_status.is_none());
        assert_eq!(spec.deadline, Some(Duration::from_secs(5)));
        assert!(spec.check().is_ok());
    }

    #[test]
    fn test_bodyless_methods_reject_body() {
        let err = RequestSpec::get("/x").body("nope").check().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidRequest(_)));
        assert!(err.to_string().contains("GET"));

        assert!(RequestSpec::delete("/x").body("nope").check().is_err());
        assert!(RequestSpec::delete("/x").check().is_ok());
        assert!(RequestSpec::patch("/x").body("ok").check().is_ok());
    }

    #[test]
    fn test_multipart_body_rules() {
        let form = || -> reqwest::Result<reqwest::multipart::Form> {
            Ok(reqwest::multipart::Form::new().text("name", "icon"))
        };

        assert!(RequestSpec::post("v1/icon").multipart(form).check().is_ok());

        let err = RequestSpec::get("v1/icon").multipart(form).check().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidRequest(_)));

        let err = RequestSpec::post("v1/icon")
            .body("raw")
            .multipart(form)
            .check()
            .unwrap_err();
        assert!(err.to_string().contains("both a raw and a multipart body"));
    }

    #[test]
    fn test_json_body() {
        let spec = RequestSpec::post("v1/categories")
            .json_body(&serde_json::json!({"name": "Apps", "priority": 9}))
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(spec.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["name"], "Apps");
        assert_eq!(body["priority"], 9);
    }

    #[test]
    fn test_basic_auth_middleware() {
        let credentials = BasicCredentials::new("admin", "secret");
        let spec = RequestSpec::post("v1/auth/token").basic_auth(&credentials);

        let mut request = reqwest::Request::new(
            reqwest::Method::POST,
            "https://example.com/api/v1/auth/token".parse().unwrap(),
        );
        (spec.middleware.as_ref().unwrap())(&mut request);

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Basic YWRtaW46c2VjcmV0"
        );
    }

    #[test]
    fn test_debug_hides_closures() {
        let spec = RequestSpec::get("/x").middleware(|_| {});
        let debug = format!("{:?}", spec);
        assert!(debug.contains("middleware: true"));
    }
}
