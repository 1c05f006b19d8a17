//! Startup errors emitted by the Forkcast server.
//!
//! Request-time failures live in [`crate::api::errors`].

use std::net::SocketAddr;
use std::sync::Arc;

use forkcast_data::ClientBuildError;
use thiserror::Error;

/// Errors raised while configuring or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The bind address did not parse.
    #[error("invalid --{field} value {value:?}: {source}")]
    InvalidAddress {
        /// Option name.
        field: &'static str,
        /// The configured value.
        value: String,
        /// Parser error.
        #[source]
        source: std::net::AddrParseError,
    },
    /// A numeric option was below its minimum.
    #[error("--{field} must be at least {min}, got {value}")]
    OutOfRange {
        /// Option name.
        field: &'static str,
        /// Smallest accepted value.
        min: u64,
        /// The configured value.
        value: u64,
    },
    /// The upstream HTTP client could not be built.
    #[error("failed to build upstream client: {0}")]
    BuildUpstream(#[source] ClientBuildError),
    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server terminated unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
}
