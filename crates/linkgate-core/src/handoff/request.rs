//! A single navigation request, decomposed for policy checks.

use anyhow::{Context, Result};
use url::Url;

/// One navigation event, parsed and decomposed.
///
/// Scheme and host are lower case as guaranteed by `url::Url`, so table
/// lookups are case-insensitive without further normalisation. Path, query
/// and fragment keep the serialisation the URL parser produced (percent
/// encoding included). A request is built per navigation event and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRequest {
    url: Url,
    scheme: String,
    host: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl NavRequest {
    /// Parse a raw URL string into a request.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).with_context(|| format!("unparseable navigation URL: {raw}"))?;
        Ok(Self::from_url(url))
    }

    /// Decompose an already parsed URL.
    pub fn from_url(url: Url) -> Self {
        let scheme = url.scheme().to_string();
        let host = url.host_str().map(str::to_string);
        let path = url.path().to_string();
        let query = url.query().map(str::to_string);
        let fragment = url.fragment().map(str::to_string);
        Self {
            url,
            scheme,
            host,
            path,
            query,
            fragment,
        }
    }

    /// The full requested URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Raw path component. For web URLs the parser normalises an absent
    /// path to `/`; for opaque schemes it is the scheme-specific part
    /// (`mailto:a@b.com` has path `a@b.com`).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}
