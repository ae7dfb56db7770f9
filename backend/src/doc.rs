//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for both services. It registers:
//!
//! - **Paths**: the gateway's `POST /weather`, the orchestrator's
//!   `GET /weather/{zipcode}` and its missing-parameter route, and the health
//!   probes shared by both
//! - **Schemas**: the [`WeatherResultSchema`] wrapper that provides the
//!   OpenAPI definition without coupling domain types to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::WeatherResultSchema;
use crate::inbound::http::weather::{MissingParameterResponse, ZipcodeRequest};
use utoipa::OpenApi;

/// OpenAPI document for the weather services.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CEP weather API",
        description = "Resolve a Brazilian postal code to its city and report the current temperature in Celsius, Fahrenheit and Kelvin."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::weather::post_weather,
        crate::inbound::http::weather::get_weather,
        crate::inbound::http::weather::missing_zipcode,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(WeatherResultSchema, ZipcodeRequest, MissingParameterResponse)),
    tags(
        (name = "weather", description = "Postal code to temperature lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
