//! Core domain types and the scoring-and-ranking engine for Forkcast.
//!
//! The crate is pure and synchronous. Given a [`UserProfile`], a catalog of
//! [`Restaurant`]s, and a [`TextRelevance`] model built from the user's
//! cuisines, [`recommend`] scans the catalog with a [`CatalogScanner`] and
//! orders the results with [`rank`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod coordinate;
pub mod distance;
pub mod profile;
pub mod rank;
pub mod recommend;
pub mod recommendation;
pub mod relevance;
pub mod scan;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Identifier, Menu, MenuItem, Price, Restaurant};
pub use coordinate::{Coordinate, CoordinateError, parse_coordinate};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use profile::{CUISINE_SEPARATOR, UserProfile, parse_cuisines};
pub use rank::{DEFAULT_RESULT_LIMIT, rank};
pub use recommend::{Recommendations, recommend};
pub use recommendation::{Ranked, ScoredItem, ScoredRestaurant, round_to_hundredths};
pub use relevance::TextRelevance;
pub use scan::{CatalogScanner, RELEVANCE_FLOOR, ScanMode, ThresholdPolicy};
