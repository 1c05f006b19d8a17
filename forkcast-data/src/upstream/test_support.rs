//! Test utilities for upstream sources.
//!
//! This module provides [`StubUpstreamSource`], a deterministic test double
//! for [`UpstreamSource`] that returns pre-configured responses without
//! making HTTP requests.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use forkcast_core::{Restaurant, UserProfile};

use super::{UpstreamError, UpstreamSource};

/// Stub `UpstreamSource` for testing.
///
/// Every call returns a clone of the configured response and the requested
/// user ids are recorded in call order.
///
/// # Example
///
/// ```
/// use forkcast_core::{Coordinate, UserProfile};
/// use forkcast_data::UpstreamSource;
/// use forkcast_data::upstream::test_support::StubUpstreamSource;
///
/// # async fn demo() {
/// let profile = UserProfile::from_cuisine_list(Coordinate::new(21.0, 105.8), "Pho");
/// let source = StubUpstreamSource::new(profile.clone(), Vec::new());
///
/// assert_eq!(source.user_profile("7").await, Ok(profile));
/// assert_eq!(source.requested_users(), ["7"]);
/// # }
/// ```
#[derive(Debug)]
pub struct StubUpstreamSource {
    profile: Result<UserProfile, UpstreamError>,
    catalog: Result<Vec<Restaurant>, UpstreamError>,
    requested: Mutex<Vec<String>>,
}

impl StubUpstreamSource {
    /// Create a source that returns `profile` and `catalog`.
    #[must_use]
    pub const fn new(profile: UserProfile, catalog: Vec<Restaurant>) -> Self {
        Self {
            profile: Ok(profile),
            catalog: Ok(catalog),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Make every profile request fail with `error`.
    #[must_use]
    pub fn with_profile_error(mut self, error: UpstreamError) -> Self {
        self.profile = Err(error);
        self
    }

    /// Make every catalog request fail with `error`.
    #[must_use]
    pub fn with_catalog_error(mut self, error: UpstreamError) -> Self {
        self.catalog = Err(error);
        self
    }

    /// User ids passed to [`UpstreamSource::user_profile`], in call order.
    #[must_use]
    pub fn requested_users(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl UpstreamSource for StubUpstreamSource {
    async fn user_profile(&self, user_id: &str) -> Result<UserProfile, UpstreamError> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user_id.to_owned());
        self.profile.clone()
    }

    async fn catalog(&self) -> Result<Vec<Restaurant>, UpstreamError> {
        self.catalog.clone()
    }
}
