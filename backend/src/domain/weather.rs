//! Weather readings and the converted result returned to callers.
//!
//! Temperatures are narrowed to `f32` at the provider boundary and Kelvin is
//! derived in single precision with a whole-degree offset of 273.

use serde::{Deserialize, Serialize};

/// Offset added to Celsius to obtain the reported Kelvin value.
pub const KELVIN_OFFSET: f32 = 273.0;

/// Current-conditions snapshot as reported by the weather provider.
///
/// Only the two temperatures take part in conversion; the reading is
/// discarded once a [`WeatherResult`] has been built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius.
    pub temp_c: f64,
    /// Temperature in degrees Fahrenheit, as computed by the provider.
    pub temp_f: f64,
}

/// Converted temperatures for a city.
///
/// # Examples
/// ```
/// use backend::domain::{WeatherReading, WeatherResult};
///
/// let result = WeatherResult::from_reading(
///     "Vila Velha",
///     WeatherReading { temp_c: 28.5, temp_f: 83.3 },
/// );
/// assert_eq!(result.kelvin, 301.5);
/// assert_eq!(result.fahrenheit, 83.3_f32);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    /// City name the lookup was made for.
    pub city: String,
    /// Temperature in degrees Celsius.
    #[serde(rename = "temp_C")]
    pub celsius: f32,
    /// Temperature in degrees Fahrenheit.
    #[serde(rename = "temp_F")]
    pub fahrenheit: f32,
    /// Temperature in Kelvin.
    #[serde(rename = "temp_K")]
    pub kelvin: f32,
}

impl WeatherResult {
    /// Convert a provider reading for `city`.
    ///
    /// Fahrenheit is taken from the provider unmodified; Kelvin is computed
    /// from the narrowed Celsius value.
    #[must_use]
    pub fn from_reading(city: impl Into<String>, reading: WeatherReading) -> Self {
        let celsius = reading.temp_c as f32;
        Self {
            city: city.into(),
            celsius,
            fahrenheit: reading.temp_f as f32,
            kelvin: celsius + KELVIN_OFFSET,
        }
    }
}
