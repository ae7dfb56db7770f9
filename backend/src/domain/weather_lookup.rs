//! City → current temperature lookup against the weather provider.

use std::sync::Arc;

use serde::Deserialize;

use super::ports::{HttpReply, HttpTransport};
use super::{ClassifiedError, ProviderEndpoint, RequestContext, WeatherReading, WeatherResult};

/// Success envelope; everything beyond the two temperatures is ignored.
#[derive(Debug, Deserialize)]
struct CurrentWeatherDto {
    current: CurrentConditionsDto,
}

#[derive(Debug, Deserialize)]
struct CurrentConditionsDto {
    temp_c: f64,
    temp_f: f64,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ProviderErrorDto {
    error: ProviderErrorBodyDto,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBodyDto {
    message: String,
}

/// Fetches current conditions for a city and converts them.
#[derive(Clone)]
pub struct WeatherLookup {
    transport: Arc<dyn HttpTransport>,
    endpoint: ProviderEndpoint,
    api_key: String,
}

impl WeatherLookup {
    /// Create a lookup against the provider rooted at `endpoint`.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        endpoint: ProviderEndpoint,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint,
            api_key: api_key.into(),
        }
    }

    /// Fetch and convert the current temperature for `city`.
    ///
    /// # Errors
    /// - `400` with the transport error text when the call fails.
    /// - The provider's status and message for non-2xx replies carrying its
    ///   error envelope; `400 error making request` otherwise.
    /// - `500` with the parse error when a 2xx body lacks the temperatures.
    pub async fn lookup(
        &self,
        ctx: &RequestContext,
        city: &str,
    ) -> Result<WeatherResult, ClassifiedError> {
        let url = self.endpoint.url_for(
            &["v1", "current.json"],
            &[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")],
        );
        let reply = self
            .transport
            .get(ctx, url)
            .await
            .map_err(|err| ClassifiedError::transport(None, err.to_string()))?;
        let reading = decode_reply(&reply)?;
        Ok(WeatherResult::from_reading(city, reading))
    }
}

fn decode_reply(reply: &HttpReply) -> Result<WeatherReading, ClassifiedError> {
    if !reply.is_success() {
        return Err(
            match serde_json::from_slice::<ProviderErrorDto>(&reply.body) {
                Ok(dto) => ClassifiedError::transport(Some(reply.status), dto.error.message),
                Err(_) => ClassifiedError::request_failed(),
            },
        );
    }
    let dto: CurrentWeatherDto = serde_json::from_slice(&reply.body)
        .map_err(|err| ClassifiedError::decode(err.to_string()))?;
    Ok(WeatherReading {
        temp_c: dto.current.temp_c,
        temp_f: dto.current.temp_f,
    })
}
