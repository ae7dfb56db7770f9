//! Driving port answering "what is the weather at this zipcode?".
//!
//! The orchestration pipeline implements it in-process; the gateway also
//! implements it by calling a remote orchestration service. Inbound handlers
//! depend only on this trait, so both deployment topologies run the same
//! handler code.

use async_trait::async_trait;

use crate::domain::{ClassifiedError, RequestContext, WeatherReading, WeatherResult};

/// Port resolving a raw zipcode into converted temperatures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZipcodeWeatherQuery: Send + Sync {
    /// Run the lookup chain for `raw_zipcode`.
    ///
    /// # Errors
    /// Returns the first stage's [`ClassifiedError`] unchanged, except for
    /// format validation failures which are always `422 invalid zipcode`.
    async fn weather_for_zipcode(
        &self,
        ctx: &RequestContext,
        raw_zipcode: &str,
    ) -> Result<WeatherResult, ClassifiedError>;
}

/// Fixture implementation answering every zipcode with the same reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureZipcodeWeatherQuery;

#[async_trait]
impl ZipcodeWeatherQuery for FixtureZipcodeWeatherQuery {
    async fn weather_for_zipcode(
        &self,
        _ctx: &RequestContext,
        _raw_zipcode: &str,
    ) -> Result<WeatherResult, ClassifiedError> {
        Ok(WeatherResult::from_reading(
            "São Paulo",
            WeatherReading {
                temp_c: 25.0,
                temp_f: 77.0,
            },
        ))
    }
}
