//! URL construction for the Jamf API families.
//!
//! An [`Endpoint`] is fixed at client construction: the server's base URL with
//! the family prefix (`/JSSResource`, `/api` or nothing) folded into its path.
//! Each call then supplies a relative [`Uri`] that is joined onto it.

use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// Default content type for the classic XML API.
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Default content type for the JSON APIs.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// The API family a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// The XML API under `/JSSResource`.
    Classic,
    /// The JSON API under `/api`.
    JamfPro,
    /// Session-based endpoints served from the server root.
    Informal,
}

impl ApiFamily {
    /// Path prefix appended to the server URL.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            ApiFamily::Classic => "/JSSResource",
            ApiFamily::JamfPro => "/api",
            ApiFamily::Informal => "",
        }
    }

    /// Content type sent when a request does not override it.
    pub fn default_content_type(&self) -> &'static str {
        match self {
            ApiFamily::Classic => XML_CONTENT_TYPE,
            ApiFamily::JamfPro | ApiFamily::Informal => JSON_CONTENT_TYPE,
        }
    }
}

/// A path relative to the endpoint plus optional query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uri {
    /// Relative entity path, e.g. `/computergroups/id/1`.
    pub entity: String,
    /// Query parameters. Encoded sorted by key.
    pub params: Vec<(String, String)>,
}

impl Uri {
    /// Create a URI for the given entity path.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add several query parameters.
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl From<&str> for Uri {
    fn from(entity: &str) -> Self {
        Uri::new(entity)
    }
}

impl From<String> for Uri {
    fn from(entity: String) -> Self {
        Uri::new(entity)
    }
}

/// Absolute base URL plus the API family prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
    family: ApiFamily,
}

impl Endpoint {
    /// Parse `base_url` and fold the family prefix into its path.
    ///
    /// Rejects anything that is not an absolute `http`/`https` URL.
    pub fn new(base_url: &str, family: ApiFamily) -> Result<Self> {
        let mut base = Url::parse(base_url)?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                base.scheme(),
                base_url
            ))));
        }
        if base.cannot_be_a_base() || base.host_str().is_none() {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            ))));
        }

        base.set_query(None);
        base.set_fragment(None);
        {
            let mut segments = base.path_segments_mut().map_err(|_| {
                Error::new(ErrorKind::InvalidUrl(format!(
                    "{} cannot be used as a base URL",
                    base_url
                )))
            })?;
            segments.pop_if_empty();
            segments.extend(family.path_prefix().split('/').filter(|s| !s.is_empty()));
        }

        Ok(Self { base, family })
    }

    /// The base URL including the family prefix.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The API family of this endpoint.
    pub fn family(&self) -> ApiFamily {
        self.family
    }

    /// Join `uri` onto the endpoint.
    ///
    /// Empty and `.` segments are dropped so slashes never double up, and `..`
    /// only removes segments contributed by `uri` itself, never the prefix.
    pub fn url_for(&self, uri: &Uri) -> Url {
        let mut url = self.base.clone();

        let mut segments: Vec<&str> = Vec::new();
        for segment in uri.entity.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }
        let trailing_slash = uri.entity.ends_with('/') && !segments.is_empty();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
            if trailing_slash {
                path.push("");
            }
        }

        if !uri.params.is_empty() {
            let mut params: Vec<&(String, String)> = uri.params.iter().collect();
            params.sort_by(|a, b| a.0.cmp(&b.0));
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        url
    }
}
