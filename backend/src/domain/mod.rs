//! Domain primitives and services.
//!
//! Purpose: Define the zipcode value type, the classified error contract and
//! the lookup services that turn a raw postal code into converted
//! temperatures. Nothing in this module knows about HTTP frameworks or
//! clients; providers are reached through [`ports::HttpTransport`].
//!
//! Public surface:
//! - ZipCode: canonical `nnnnn-nnn` postal code.
//! - ClassifiedError / ErrorKind: failure kind, status and message.
//! - LocationResolver: postal code → location.
//! - WeatherLookup: city → converted temperatures.
//! - WeatherPipeline: both stages behind [`ports::ZipcodeWeatherQuery`].

pub mod context;
pub mod endpoint;
pub mod error;
pub mod location;
pub mod location_resolver;
pub mod pipeline;
pub mod ports;
pub mod trace_id;
pub mod weather;
pub mod weather_lookup;
pub mod zipcode;

pub use self::context::RequestContext;
pub use self::endpoint::{ProviderEndpoint, ProviderEndpointError};
pub use self::error::{
    ClassifiedError, ErrorKind, INVALID_ZIPCODE_MESSAGE, REQUEST_FAILED_MESSAGE,
    ZIPCODE_NOT_FOUND_MESSAGE,
};
pub use self::location::{DirectoryAnswer, LocationRecord};
pub use self::location_resolver::LocationResolver;
pub use self::pipeline::WeatherPipeline;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::weather::{KELVIN_OFFSET, WeatherReading, WeatherResult};
pub use self::weather_lookup::WeatherLookup;
pub use self::zipcode::{ZipCode, ZipCodeValidationError};
