//! Driven port for plain HTTP GET calls against external providers.
//!
//! Provider-specific decoding and classification live in the domain services;
//! the transport only moves bytes and reports whether a response arrived.

use async_trait::async_trait;
use url::Url;

use super::define_port_error;
use crate::domain::RequestContext;

/// Raw provider response: status code and the complete body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes, fully read.
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Build a reply from a status and anything convertible into bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

define_port_error! {
    /// Failures raised before a complete response was received.
    pub enum HttpTransportError {
        /// Connection, TLS or body read failure.
        Transport { message: String } => "{message}",
        /// The call exceeded its deadline.
        Timeout { message: String } => "{message}",
    }
}

/// Port for issuing GET requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url`, forwarding `ctx` to the adapter.
    ///
    /// Non-2xx statuses are returned as replies, not errors.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let reply = transport
    ///     .get(&RequestContext::detached(), Url::parse("https://viacep.com.br/ws/01001-000/json/")?)
    ///     .await?;
    /// assert!(reply.is_success());
    /// ```
    async fn get(&self, ctx: &RequestContext, url: Url) -> Result<HttpReply, HttpTransportError>;
}
