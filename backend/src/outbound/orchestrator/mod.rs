//! Orchestration service outbound adapter.
//!
//! This module provides the HTTP implementation of the `ZipcodeWeatherQuery`
//! port used by the gateway.

mod http_client;

pub use http_client::OrchestratorHttpClient;
