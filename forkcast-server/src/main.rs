//! Entry point for the Forkcast recommendation server.
#![forbid(unsafe_code)]

use eyre::WrapErr;
use forkcast_server::ServerError;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match forkcast_server::run().await {
        Err(ServerError::ArgumentParsing(err)) => err.exit(),
        result => result.wrap_err("forkcast server failed"),
    }
}
