//! Facade crate for the Forkcast recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the TF-IDF scorer
//! and HTTP upstream source behind feature flags.

#![forbid(unsafe_code)]

pub use forkcast_core::{
    Coordinate, CoordinateError, DEFAULT_RESULT_LIMIT, Identifier, Menu, MenuItem, Price,
    Recommendations, Restaurant, ScanMode, ScoredItem, ScoredRestaurant, TextRelevance,
    UserProfile, haversine_km, parse_coordinate, rank, recommend,
};

#[cfg(feature = "scorer-tfidf")]
pub use forkcast_scorer::{TfIdfModel, build_relevance_model, score_against};

#[cfg(feature = "upstream-http")]
pub use forkcast_data::{HttpUpstreamConfig, HttpUpstreamSource, UpstreamError, UpstreamSource};
