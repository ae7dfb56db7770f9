//! Remote orchestration service adapter.
//!
//! The gateway answers weather queries by forwarding the canonical zipcode to
//! the orchestration service and relaying whatever classification it returns.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::ports::{HttpReply, HttpTransport, ZipcodeWeatherQuery};
use crate::domain::{
    ClassifiedError, ProviderEndpoint, REQUEST_FAILED_MESSAGE, RequestContext, WeatherResult,
    ZipCode,
};
use crate::outbound::http::body_preview;

/// Error bodies the orchestration service may answer with.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteErrorDto {
    /// Classified errors: the message as a bare JSON string.
    Message(String),
    /// Routing errors: `{"message": ...}`.
    Envelope { message: String },
}

impl RemoteErrorDto {
    fn into_message(self) -> String {
        match self {
            Self::Message(message) | Self::Envelope { message } => message,
        }
    }
}

/// [`ZipcodeWeatherQuery`] implemented by calling `GET {base}/weather/{code}`.
#[derive(Clone)]
pub struct OrchestratorHttpClient {
    transport: Arc<dyn HttpTransport>,
    base: ProviderEndpoint,
}

impl OrchestratorHttpClient {
    /// Create a client for the orchestration service rooted at `base`.
    pub fn new(transport: Arc<dyn HttpTransport>, base: ProviderEndpoint) -> Self {
        Self { transport, base }
    }
}

#[async_trait]
impl ZipcodeWeatherQuery for OrchestratorHttpClient {
    async fn weather_for_zipcode(
        &self,
        ctx: &RequestContext,
        raw_zipcode: &str,
    ) -> Result<WeatherResult, ClassifiedError> {
        let zip = ZipCode::parse(raw_zipcode).map_err(|_| ClassifiedError::invalid_zipcode())?;
        let url = self.base.url_for(&["weather", zip.as_str()], &[]);
        let reply = self
            .transport
            .get(ctx, url)
            .await
            .map_err(|err| ClassifiedError::transport(None, err.to_string()))?;
        relay_reply(&reply)
    }
}

fn relay_reply(reply: &HttpReply) -> Result<WeatherResult, ClassifiedError> {
    if reply.is_success() {
        return serde_json::from_slice(&reply.body)
            .map_err(|err| ClassifiedError::decode(err.to_string()));
    }
    let message = match serde_json::from_slice::<RemoteErrorDto>(&reply.body) {
        Ok(dto) => dto.into_message(),
        Err(_) => body_preview(&reply.body),
    };
    let message = if message.is_empty() {
        REQUEST_FAILED_MESSAGE.to_owned()
    } else {
        message
    };
    Err(ClassifiedError::relayed(reply.status, message))
}
