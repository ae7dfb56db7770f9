//! Zipcode → location → weather orchestration.
//!
//! The pipeline validates the raw input, resolves the location and fetches
//! the weather for its city. Stages run strictly in order and the first
//! failure is returned unchanged; the weather provider is never called for a
//! code that failed validation or resolution.

use async_trait::async_trait;

use super::ports::ZipcodeWeatherQuery;
use super::{
    ClassifiedError, LocationResolver, RequestContext, WeatherLookup, WeatherResult, ZipCode,
};

/// In-process implementation of [`ZipcodeWeatherQuery`].
#[derive(Clone)]
pub struct WeatherPipeline {
    resolver: LocationResolver,
    lookup: WeatherLookup,
}

impl WeatherPipeline {
    /// Compose the two lookup stages.
    pub fn new(resolver: LocationResolver, lookup: WeatherLookup) -> Self {
        Self { resolver, lookup }
    }
}

#[async_trait]
impl ZipcodeWeatherQuery for WeatherPipeline {
    async fn weather_for_zipcode(
        &self,
        ctx: &RequestContext,
        raw_zipcode: &str,
    ) -> Result<WeatherResult, ClassifiedError> {
        let zip = ZipCode::parse(raw_zipcode).map_err(|_| ClassifiedError::invalid_zipcode())?;
        let location = self.resolver.resolve(ctx, &zip).await?;
        self.lookup.lookup(ctx, &location.city).await
    }
}

#[cfg(test)]
mod tests {
    //! End-to-end pipeline behaviour over a mocked transport.
    use std::sync::Arc;

    use super::*;
    use crate::domain::ProviderEndpoint;
    use crate::domain::ports::{HttpReply, MockHttpTransport};
    use rstest::rstest;

    const DIRECTORY: &str = "https://viacep.com.br";
    const WEATHER: &str = "https://api.weatherapi.com";

    fn pipeline_over(transport: MockHttpTransport) -> WeatherPipeline {
        let transport = Arc::new(transport);
        WeatherPipeline::new(
            LocationResolver::new(
                transport.clone(),
                ProviderEndpoint::parse(DIRECTORY).expect("valid endpoint"),
            ),
            WeatherLookup::new(
                transport,
                ProviderEndpoint::parse(WEATHER).expect("valid endpoint"),
                "secret",
            ),
        )
    }

    fn happy_transport(expected_calls: usize) -> MockHttpTransport {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|_, url| url.host_str() == Some("viacep.com.br"))
            .times(expected_calls)
            .returning(|_, _| Ok(HttpReply::new(200, r#"{"localidade":"Vila Velha"}"#)));
        transport
            .expect_get()
            .withf(|_, url| url.host_str() == Some("api.weatherapi.com"))
            .times(expected_calls)
            .returning(|_, _| {
                Ok(HttpReply::new(
                    200,
                    r#"{"current":{"temp_c":28.5,"temp_f":83.3}}"#,
                ))
            });
        transport
    }

    #[rstest]
    #[case::digits_only("29902555")]
    #[case::hyphenated("29902-555")]
    #[tokio::test]
    async fn resolves_weather_for_both_input_forms(#[case] raw: &str) {
        let pipeline = pipeline_over(happy_transport(1));
        let result = pipeline
            .weather_for_zipcode(&RequestContext::detached(), raw)
            .await
            .expect("pipeline succeeds");
        assert_eq!(
            result,
            WeatherResult {
                city: "Vila Velha".into(),
                celsius: 28.5,
                fahrenheit: 83.3,
                kelvin: 301.5,
            }
        );
    }

    #[rstest]
    #[case::too_short("2990255")]
    #[case::letters("2990255a")]
    #[case::misplaced_hyphen("2990-2555")]
    #[case::empty("")]
    #[tokio::test]
    async fn invalid_input_never_reaches_a_provider(#[case] raw: &str) {
        let mut transport = MockHttpTransport::new();
        transport.expect_get().never();
        let pipeline = pipeline_over(transport);

        let error = pipeline
            .weather_for_zipcode(&RequestContext::detached(), raw)
            .await
            .expect_err("invalid input");
        assert_eq!(error, ClassifiedError::invalid_zipcode());
    }

    #[tokio::test]
    async fn resolution_failure_skips_the_weather_call() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|_, url| url.host_str() == Some("viacep.com.br"))
            .times(1)
            .return_once(|_, _| Ok(HttpReply::new(200, r#"{"erro":true}"#)));
        transport
            .expect_get()
            .withf(|_, url| url.host_str() == Some("api.weatherapi.com"))
            .never();
        let pipeline = pipeline_over(transport);

        let error = pipeline
            .weather_for_zipcode(&RequestContext::detached(), "00000000")
            .await
            .expect_err("unknown code");
        assert_eq!(error, ClassifiedError::zipcode_not_found());
    }

    #[tokio::test]
    async fn weather_failures_propagate_unchanged() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|_, url| url.host_str() == Some("viacep.com.br"))
            .return_once(|_, _| Ok(HttpReply::new(200, r#"{"localidade":"Vila Velha"}"#)));
        transport
            .expect_get()
            .withf(|_, url| url.host_str() == Some("api.weatherapi.com"))
            .return_once(|_, _| {
                Ok(HttpReply::new(
                    401,
                    r#"{"error":{"code":2006,"message":"API key is invalid."}}"#,
                ))
            });
        let pipeline = pipeline_over(transport);

        let error = pipeline
            .weather_for_zipcode(&RequestContext::detached(), "29902555")
            .await
            .expect_err("provider rejected the key");
        assert_eq!(
            error,
            ClassifiedError::transport(Some(401), "API key is invalid.")
        );
    }

    #[tokio::test]
    async fn repeated_queries_yield_identical_results() {
        let pipeline = pipeline_over(happy_transport(2));
        let ctx = RequestContext::detached();
        let first = pipeline
            .weather_for_zipcode(&ctx, "29902555")
            .await
            .expect("first call");
        let second = pipeline
            .weather_for_zipcode(&ctx, "29902-555")
            .await
            .expect("second call");
        assert_eq!(first, second);
    }
}
