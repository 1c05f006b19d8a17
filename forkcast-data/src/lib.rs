//! Upstream data access for the Forkcast engine.
//!
//! Responsibilities:
//! - Define the [`UpstreamSource`](upstream::UpstreamSource) seam through
//!   which request handlers obtain a user profile and the restaurant catalog.
//! - Provide an HTTP adapter over the user and catalog services.
//! - Own the upstream JSON wire format and its conversion into domain types.
//!
//! Boundaries:
//! - Do not encode scoring or ranking rules (live in `forkcast-core`).
//! - Keep all I/O async; the adapter never blocks an executor thread.
//!
//! Invariants:
//! - No global mutable state; one client is shared per process.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod upstream;

pub use upstream::{
    ClientBuildError, DEFAULT_USER_AGENT, HttpUpstreamConfig, HttpUpstreamSource, UpstreamError,
    UpstreamSource,
};
