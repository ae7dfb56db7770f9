//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::WeatherResult`].
///
/// Temperatures for the resolved city in three scales. Kelvin is Celsius
/// plus 273.
#[derive(ToSchema)]
#[schema(as = WeatherResult)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct WeatherResultSchema {
    /// City the postal code resolved to.
    #[schema(example = "Vila Velha")]
    city: String,
    /// Temperature in degrees Celsius.
    #[schema(rename = "temp_C", example = 28.5)]
    celsius: f32,
    /// Temperature in degrees Fahrenheit.
    #[schema(rename = "temp_F", example = 83.3)]
    fahrenheit: f32,
    /// Temperature in Kelvin.
    #[schema(rename = "temp_K", example = 301.5)]
    kelvin: f32,
}
