//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use actix_web::web;
use backend::domain::ports::ZipcodeWeatherQuery;
use backend::inbound::http::weather::{configure_gateway, configure_orchestrator};

/// Which of the two services a server instance runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    /// Input-facing service accepting `POST /weather`.
    Gateway,
    /// Lookup service accepting `GET /weather/{zipcode}`.
    Orchestrator,
}

impl ServiceRole {
    /// Name used for logs and the metrics namespace.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gateway => "gateway",
            Self::Orchestrator => "orchestrator",
        }
    }

    /// Route registration for this role.
    pub(crate) fn routes(self) -> fn(&mut web::ServiceConfig) {
        match self {
            Self::Gateway => configure_gateway,
            Self::Orchestrator => configure_orchestrator,
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) role: ServiceRole,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) weather: Arc<dyn ZipcodeWeatherQuery>,
    pub(crate) request_budget: Duration,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration for `role`.
    #[must_use]
    pub fn new(
        role: ServiceRole,
        bind_addr: SocketAddr,
        weather: Arc<dyn ZipcodeWeatherQuery>,
        request_budget: Duration,
    ) -> Self {
        Self {
            role,
            bind_addr,
            weather,
            request_budget,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
