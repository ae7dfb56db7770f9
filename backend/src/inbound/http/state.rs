//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{FixtureZipcodeWeatherQuery, ZipcodeWeatherQuery};
use crate::domain::{RequestContext, TraceId};

/// Budget applied to a request when none is configured.
pub const DEFAULT_REQUEST_BUDGET: Duration = Duration::from_secs(10);

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub weather: Arc<dyn ZipcodeWeatherQuery>,
    pub request_budget: Duration,
}

impl HttpState {
    /// Construct state from a weather query port and the per-request budget.
    pub fn new(weather: Arc<dyn ZipcodeWeatherQuery>, request_budget: Duration) -> Self {
        Self {
            weather,
            request_budget,
        }
    }

    /// Context for the request currently being handled.
    ///
    /// Picks up the trace identifier scoped by the `Trace` middleware and
    /// starts the downstream deadline from now.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new(TraceId::current()).with_budget(self.request_budget)
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureZipcodeWeatherQuery), DEFAULT_REQUEST_BUDGET)
    }
}
