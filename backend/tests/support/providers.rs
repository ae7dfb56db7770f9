//! Stubbed postal directory and weather provider for end-to-end tests.
//!
//! Both providers are served by one `httpmock` server; the orchestrator under
//! test is wired exactly as the binary wires it, with a real
//! [`ReqwestTransport`] pointed at the stub.

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use backend::domain::ports::HttpTransport;
use backend::domain::{LocationResolver, ProviderEndpoint, WeatherLookup, WeatherPipeline};
use backend::inbound::http::state::HttpState;
use backend::outbound::http::ReqwestTransport;
use httpmock::MockServer;

pub const TEST_API_KEY: &str = "test-key";
pub const REQUEST_BUDGET: Duration = Duration::from_secs(5);

pub fn transport() -> Arc<dyn HttpTransport> {
    Arc::new(ReqwestTransport::new(REQUEST_BUDGET).expect("reqwest client"))
}

pub fn endpoint(raw: &str) -> ProviderEndpoint {
    ProviderEndpoint::parse(raw).expect("valid endpoint")
}

/// Orchestrator state resolving against the given directory and weather bases.
pub fn orchestrator_state(directory: &str, weather: &str) -> web::Data<HttpState> {
    let transport = transport();
    let pipeline = WeatherPipeline::new(
        LocationResolver::new(transport.clone(), endpoint(directory)),
        WeatherLookup::new(transport, endpoint(weather), TEST_API_KEY),
    );
    web::Data::new(HttpState::new(Arc::new(pipeline), REQUEST_BUDGET))
}

/// Orchestrator state with both providers served by `server`.
pub fn stubbed_orchestrator_state(server: &MockServer) -> web::Data<HttpState> {
    let base = server.base_url();
    orchestrator_state(&base, &base)
}

/// Base URL of a port that refuses connections.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
