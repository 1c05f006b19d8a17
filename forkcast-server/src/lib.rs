//! HTTP service exposing Forkcast meal and restaurant recommendations.
//!
//! `forkcast serve` layers its options from CLI flags, `FORKCAST_*`
//! environment variables, and configuration files, then serves
//! `/recommendMeals` and `/recommendRestaurants` until interrupted.
#![forbid(unsafe_code)]

pub mod api;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use forkcast_core::DEFAULT_RESULT_LIMIT;
use forkcast_data::{HttpUpstreamConfig, HttpUpstreamSource};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

pub use api::create_router;
pub use api::handlers::AppState;
pub use error::ServerError;

const ARG_BIND: &str = "bind";
const ARG_USER_SERVICE_URL: &str = "user-service-url";
const ARG_CATALOG_SERVICE_URL: &str = "catalog-service-url";
const ARG_UPSTREAM_TIMEOUT_SECS: &str = "upstream-timeout-secs";
const ARG_RESULT_LIMIT: &str = "result-limit";

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:5120";

/// Run the server with the current process arguments and environment.
///
/// # Errors
/// Returns [`ServerError`] when arguments or configuration are invalid, the
/// upstream client cannot be built, or the listener fails.
pub async fn run() -> Result<(), ServerError> {
    let cli = Cli::try_parse().map_err(ServerError::ArgumentParsing)?;
    match cli.command {
        Command::Serve(args) => serve(args.into_config()?).await,
    }
}

/// Bind `config.bind` and serve until Ctrl-C.
///
/// # Errors
/// Returns [`ServerError`] when the upstream client cannot be built, the
/// address cannot be bound, or the server stops with an I/O error.
pub async fn serve(config: ServeConfig) -> Result<(), ServerError> {
    let source = HttpUpstreamSource::with_config(config.upstream.clone())
        .map_err(ServerError::BuildUpstream)?;
    let state = AppState::new(Arc::new(source)).with_result_limit(config.result_limit);
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    info!(
        bind = %config.bind,
        user_service = %config.upstream.user_service_url,
        catalog_service = %config.upstream.catalog_service_url,
        "forkcast listening"
    );
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[derive(Debug, Parser)]
#[command(
    name = "forkcast",
    about = "Location- and cuisine-aware meal recommendations over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the recommendation endpoints.
    Serve(ServeArgs),
}

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve /recommendMeals and /recommendRestaurants. Options can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Serve the recommendation endpoints"
)]
#[ortho_config(prefix = "FORKCAST")]
pub(crate) struct ServeArgs {
    /// Socket address to listen on (default 0.0.0.0:5120).
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// Base URL of the user profile service.
    #[arg(long = ARG_USER_SERVICE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) user_service_url: Option<String>,
    /// Base URL of the restaurant catalog service.
    #[arg(long = ARG_CATALOG_SERVICE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) catalog_service_url: Option<String>,
    /// Upstream connect and request timeout in seconds (default 30).
    #[arg(long = ARG_UPSTREAM_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) upstream_timeout_secs: Option<u64>,
    /// Maximum records per response (default 6).
    #[arg(long = ARG_RESULT_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) result_limit: Option<usize>,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServeConfig, ServerError> {
        let merged = self.load_and_merge().map_err(ServerError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Listen address.
    pub bind: SocketAddr,
    /// Upstream client settings.
    pub upstream: HttpUpstreamConfig,
    /// Maximum records per response.
    pub result_limit: usize,
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = ServerError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let raw_bind = args.bind.unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = raw_bind
            .parse()
            .map_err(|source| ServerError::InvalidAddress {
                field: ARG_BIND,
                value: raw_bind.clone(),
                source,
            })?;

        let defaults = HttpUpstreamConfig::default();
        let timeout_secs = args
            .upstream_timeout_secs
            .unwrap_or_else(|| defaults.timeout.as_secs());
        if timeout_secs == 0 {
            return Err(ServerError::OutOfRange {
                field: ARG_UPSTREAM_TIMEOUT_SECS,
                min: 1,
                value: 0,
            });
        }
        let result_limit = args.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT);
        if result_limit == 0 {
            return Err(ServerError::OutOfRange {
                field: ARG_RESULT_LIMIT,
                min: 1,
                value: 0,
            });
        }

        let upstream = HttpUpstreamConfig {
            user_service_url: args.user_service_url.unwrap_or(defaults.user_service_url),
            catalog_service_url: args
                .catalog_service_url
                .unwrap_or(defaults.catalog_service_url),
            timeout: Duration::from_secs(timeout_secs),
            user_agent: defaults.user_agent,
        };

        Ok(Self {
            bind,
            upstream,
            result_limit,
        })
    }
}

#[cfg(test)]
mod tests;
