//! Builders turning loaded settings into server configurations.

use std::io;
use std::sync::Arc;

use backend::domain::ports::HttpTransport;
use backend::domain::{LocationResolver, WeatherLookup, WeatherPipeline};
use backend::outbound::http::ReqwestTransport;
use backend::outbound::orchestrator::OrchestratorHttpClient;

use super::settings::{GatewaySettings, OrchestratorSettings, SettingsError};
use super::{ServerConfig, ServiceRole};

fn invalid(error: SettingsError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error)
}

fn transport(timeout: std::time::Duration) -> io::Result<Arc<dyn HttpTransport>> {
    let transport = ReqwestTransport::new(timeout)
        .map_err(|e| io::Error::other(format!("failed to build HTTP client: {e}")))?;
    Ok(Arc::new(transport))
}

/// Gateway: validate locally, forward to the orchestration service.
///
/// # Errors
/// Returns [`io::ErrorKind::InvalidInput`] for unusable settings.
pub fn gateway_config(settings: &GatewaySettings) -> io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(invalid)?;
    let orchestrator = settings.orchestrator_url().map_err(invalid)?;
    let budget = settings.request_timeout().map_err(invalid)?;
    let client = OrchestratorHttpClient::new(transport(budget)?, orchestrator);
    Ok(ServerConfig::new(
        ServiceRole::Gateway,
        bind_addr,
        Arc::new(client),
        budget,
    ))
}

/// Orchestrator: run the full pipeline in-process.
///
/// # Errors
/// Returns [`io::ErrorKind::InvalidInput`] for unusable settings.
pub fn orchestrator_config(settings: &OrchestratorSettings) -> io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(invalid)?;
    let api_key = settings.weather_api_key().map_err(invalid)?;
    let directory = settings.directory_base_url().map_err(invalid)?;
    let weather = settings.weather_base_url().map_err(invalid)?;
    let budget = settings.request_timeout().map_err(invalid)?;
    let transport = transport(budget)?;
    let pipeline = WeatherPipeline::new(
        LocationResolver::new(transport.clone(), directory),
        WeatherLookup::new(transport, weather, api_key),
    );
    Ok(ServerConfig::new(
        ServiceRole::Orchestrator,
        bind_addr,
        Arc::new(pipeline),
        budget,
    ))
}
