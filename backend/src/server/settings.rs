//! Service settings loaded via OrthoConfig.
//!
//! Each subcommand has its own settings struct. Values come from command-line
//! flags following the subcommand and from `GATEWAY_*` / `ORCHESTRATOR_*`
//! environment variables; unset values fall back to the defaults below.

use std::ffi::OsString;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use backend::domain::{ProviderEndpoint, ProviderEndpointError};

const DEFAULT_GATEWAY_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ORCHESTRATOR_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_ORCHESTRATOR_URL: &str = "http://localhost:8081";
const DEFAULT_DIRECTORY_BASE_URL: &str = "https://viacep.com.br";
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.weatherapi.com";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Unprefixed variable still honoured for the weather provider key.
pub const WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Failures turning loaded settings into runtime values.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid {name}: {source}")]
    Endpoint {
        name: &'static str,
        #[source]
        source: ProviderEndpointError,
    },
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error("weather API key is not configured; set ORCHESTRATOR_WEATHER_API_KEY or WEATHER_API_KEY")]
    MissingApiKey,
}

fn parse_bind_addr(raw: Option<&str>, default: &str) -> Result<SocketAddr, SettingsError> {
    let value = raw.unwrap_or(default);
    value.parse().map_err(|source| SettingsError::BindAddr {
        value: value.to_owned(),
        source,
    })
}

fn parse_endpoint(
    name: &'static str,
    raw: Option<&str>,
    default: &str,
) -> Result<ProviderEndpoint, SettingsError> {
    ProviderEndpoint::parse(raw.unwrap_or(default))
        .map_err(|source| SettingsError::Endpoint { name, source })
}

fn parse_timeout(raw: Option<u64>) -> Result<Duration, SettingsError> {
    match raw.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS) {
        0 => Err(SettingsError::ZeroTimeout),
        ms => Ok(Duration::from_millis(ms)),
    }
}

/// Settings for the `gateway` subcommand.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct GatewaySettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Base URL of the orchestration service.
    pub orchestrator_url: Option<String>,
    /// Budget for a whole inbound request, in milliseconds.
    pub request_timeout_ms: Option<u64>,
}

impl GatewaySettings {
    /// Load settings from `args` (program name first) and the environment.
    ///
    /// # Errors
    /// Returns a description of the first source that failed to parse.
    pub fn load_with_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| err.to_string())
    }

    /// Resolved listen address.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        parse_bind_addr(self.bind_addr.as_deref(), DEFAULT_GATEWAY_BIND_ADDR)
    }

    /// Resolved orchestration service endpoint.
    ///
    /// # Errors
    /// Returns [`SettingsError::Endpoint`] for unusable URLs.
    pub fn orchestrator_url(&self) -> Result<ProviderEndpoint, SettingsError> {
        parse_endpoint(
            "orchestrator URL",
            self.orchestrator_url.as_deref(),
            DEFAULT_ORCHESTRATOR_URL,
        )
    }

    /// Resolved request budget.
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroTimeout`] for a zero budget.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        parse_timeout(self.request_timeout_ms)
    }
}

/// Settings for the `orchestrator` subcommand.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ORCHESTRATOR")]
pub struct OrchestratorSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Weather provider API key.
    pub weather_api_key: Option<String>,
    /// Base URL of the postal directory.
    pub directory_base_url: Option<String>,
    /// Base URL of the weather provider.
    pub weather_base_url: Option<String>,
    /// Budget for a whole inbound request, in milliseconds.
    pub request_timeout_ms: Option<u64>,
}

impl OrchestratorSettings {
    /// Load settings from `args` (program name first) and the environment.
    ///
    /// # Errors
    /// Returns a description of the first source that failed to parse.
    pub fn load_with_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| err.to_string())
    }

    /// Resolved listen address.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        parse_bind_addr(self.bind_addr.as_deref(), DEFAULT_ORCHESTRATOR_BIND_ADDR)
    }

    /// Weather provider key, falling back to [`WEATHER_API_KEY_ENV`].
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingApiKey`] when neither source is set.
    pub fn weather_api_key(&self) -> Result<String, SettingsError> {
        self.weather_api_key
            .clone()
            .or_else(|| std::env::var(WEATHER_API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)
    }

    /// Resolved postal directory endpoint.
    ///
    /// # Errors
    /// Returns [`SettingsError::Endpoint`] for unusable URLs.
    pub fn directory_base_url(&self) -> Result<ProviderEndpoint, SettingsError> {
        parse_endpoint(
            "postal directory URL",
            self.directory_base_url.as_deref(),
            DEFAULT_DIRECTORY_BASE_URL,
        )
    }

    /// Resolved weather provider endpoint.
    ///
    /// # Errors
    /// Returns [`SettingsError::Endpoint`] for unusable URLs.
    pub fn weather_base_url(&self) -> Result<ProviderEndpoint, SettingsError> {
        parse_endpoint(
            "weather provider URL",
            self.weather_base_url.as_deref(),
            DEFAULT_WEATHER_BASE_URL,
        )
    }

    /// Resolved request budget.
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroTimeout`] for a zero budget.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        parse_timeout(self.request_timeout_ms)
    }
}
