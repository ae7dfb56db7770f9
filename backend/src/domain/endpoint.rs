//! Base URLs for external providers.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Errors raised while accepting a provider base URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderEndpointError {
    /// Value did not parse as an absolute URL.
    #[error("invalid provider URL {value:?}: {message}")]
    Invalid { value: String, message: String },
    /// URL has no hierarchical path to append segments to (e.g. `mailto:`).
    #[error("provider URL {value:?} cannot carry a path")]
    NotABase { value: String },
}

/// Absolute `http(s)` base URL that request paths are appended to.
///
/// # Examples
/// ```
/// use backend::domain::ProviderEndpoint;
///
/// let endpoint = ProviderEndpoint::parse("https://viacep.com.br").expect("valid URL");
/// let url = endpoint.url_for(&["ws", "01001-000", "json", ""], &[]);
/// assert_eq!(url.as_str(), "https://viacep.com.br/ws/01001-000/json/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint(Url);

impl ProviderEndpoint {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    /// Returns [`ProviderEndpointError`] when `raw` is not an absolute URL with
    /// a hierarchical path.
    pub fn parse(raw: &str) -> Result<Self, ProviderEndpointError> {
        let url = Url::parse(raw).map_err(|err| ProviderEndpointError::Invalid {
            value: raw.to_owned(),
            message: err.to_string(),
        })?;
        Self::new(url)
    }

    /// Validate an already parsed base URL.
    ///
    /// # Errors
    /// Returns [`ProviderEndpointError::NotABase`] for cannot-be-a-base URLs.
    pub fn new(url: Url) -> Result<Self, ProviderEndpointError> {
        if url.cannot_be_a_base() {
            return Err(ProviderEndpointError::NotABase {
                value: url.to_string(),
            });
        }
        Ok(Self(url))
    }

    /// Build a request URL by appending percent-encoded path segments and
    /// query pairs to the base.
    ///
    /// An empty final segment yields a trailing slash.
    #[must_use]
    pub fn url_for(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }
}

impl fmt::Display for ProviderEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
