//! Reqwest-backed implementation of the `HttpTransport` port.
//!
//! This adapter owns transport details only: default headers, trace
//! propagation, deadline enforcement and error mapping. Status codes are
//! passed through untouched for the domain services to classify.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::{Instrument, debug, debug_span};
use url::Url;

use crate::domain::ports::{HttpReply, HttpTransport, HttpTransportError};
use crate::domain::{RequestContext, TRACE_ID_HEADER};

/// User agent sent with every provider request.
pub const DEFAULT_USER_AGENT: &str = concat!("cep-weather/", env!("CARGO_PKG_VERSION"));

/// Pooled HTTP client implementing [`HttpTransport`].
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport whose calls never outlive `timeout`.
    /// ```rust,ignore
    /// let transport = ReqwestTransport::new(Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, ctx: &RequestContext, url: Url) -> Result<HttpReply, HttpTransportError> {
        let span = debug_span!(
            "provider_call",
            provider = url.host_str().unwrap_or_default(),
            path = url.path()
        );
        self.fetch(ctx, url).instrument(span).await
    }
}

impl ReqwestTransport {
    async fn fetch(&self, ctx: &RequestContext, url: Url) -> Result<HttpReply, HttpTransportError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json");
        if let Some(trace_id) = ctx.trace_id() {
            request = request.header(TRACE_ID_HEADER, trace_id.to_string());
        }
        if let Some(remaining) = ctx.remaining() {
            if remaining.is_zero() {
                return Err(HttpTransportError::timeout(format!(
                    "request deadline exceeded before calling {}",
                    redacted(&url)
                )));
            }
            request = request.timeout(remaining);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status, bytes = body.len(), "provider call completed");
        Ok(HttpReply::new(status, body.to_vec()))
    }
}

/// Drop the query string, which may carry credentials.
fn redacted(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_query(None);
    url
}

fn map_transport_error(error: reqwest::Error) -> HttpTransportError {
    let error = match error.url().map(redacted) {
        Some(url) => error.with_url(url),
        None => error,
    };
    debug!(error = %error, "provider call failed");
    if error.is_timeout() {
        HttpTransportError::timeout(error.to_string())
    } else {
        HttpTransportError::transport(error.to_string())
    }
}

/// Collapse a response body into a short single-line preview.
pub(crate) fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
