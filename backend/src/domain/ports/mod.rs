//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod http_transport;
mod weather_query;

#[cfg(test)]
pub use http_transport::MockHttpTransport;
pub use http_transport::{HttpReply, HttpTransport, HttpTransportError};
#[cfg(test)]
pub use weather_query::MockZipcodeWeatherQuery;
pub use weather_query::{FixtureZipcodeWeatherQuery, ZipcodeWeatherQuery};
