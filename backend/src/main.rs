//! Service entry-point: runs either the gateway or the orchestrator.

mod server;

use std::ffi::OsString;

use actix_web::web;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::settings::{GatewaySettings, OrchestratorSettings};
use server::{ServerConfig, create_server, gateway_config, orchestrator_config};

const BIN_NAME: &str = "cep-weather";

#[derive(Debug, Parser)]
#[command(name = BIN_NAME, version, about = "Brazilian postal code to weather services")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Accept `POST /weather` and forward valid codes to the orchestrator.
    Gateway(ServiceArgs),
    /// Serve `GET /weather/{zipcode}` by calling the postal and weather providers.
    Orchestrator(ServiceArgs),
}

#[derive(Debug, Args)]
struct ServiceArgs {
    /// Settings flags such as `--bind-addr`, forwarded to the configuration loader.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    settings: Vec<OsString>,
}

impl ServiceArgs {
    fn loader_args(self) -> impl Iterator<Item = OsString> {
        std::iter::once(OsString::from(BIN_NAME)).chain(self.settings)
    }
}

fn load_config(command: Command) -> std::io::Result<ServerConfig> {
    match command {
        Command::Gateway(args) => {
            let settings = GatewaySettings::load_with_args(args.loader_args())
                .map_err(|e| std::io::Error::other(format!("gateway settings: {e}")))?;
            gateway_config(&settings)
        }
        Command::Orchestrator(args) => {
            let settings = OrchestratorSettings::load_with_args(args.loader_args())
                .map_err(|e| std::io::Error::other(format!("orchestrator settings: {e}")))?;
            orchestrator_config(&settings)
        }
    }
}

/// Resolve once Ctrl-C or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
                return;
            }
            Err(error) => warn!(%error, "SIGTERM handler unavailable; waiting for Ctrl-C only"),
        }
    }

    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let config = load_config(cli.command)?;
    let role = config.role;
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::build_prometheus(role.name()));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();

    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        info!(service = role.name(), "shutdown requested");
        health_state.mark_unhealthy();
        handle.stop(true).await;
    });

    server.await
}
