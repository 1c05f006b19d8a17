//! Request handlers for the recommendation endpoints.

use std::fmt;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use forkcast_core::{DEFAULT_RESULT_LIMIT, Recommendations, ScanMode, recommend};
use forkcast_data::UpstreamSource;
use forkcast_scorer::build_relevance_model;
use serde::Deserialize;
use tracing::info;

use super::errors::ApiError;

/// Shared, immutable service context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Where profiles and the catalog come from.
    pub source: Arc<dyn UpstreamSource>,
    /// Maximum number of records per response.
    pub result_limit: usize,
}

impl AppState {
    /// Build state around `source` with the default result limit.
    #[must_use]
    pub fn new(source: Arc<dyn UpstreamSource>) -> Self {
        Self {
            source,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Override the result limit.
    #[must_use]
    pub const fn with_result_limit(mut self, result_limit: usize) -> Self {
        self.result_limit = result_limit;
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("source", &"<dyn UpstreamSource>")
            .field("result_limit", &self.result_limit)
            .finish()
    }
}

/// Query string accepted by both endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendQuery {
    /// The user to recommend for.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `GET /recommendMeals?user_id=…`
///
/// # Errors
/// Returns [`ApiError::BadRequest`] for a missing or blank `user_id` and
/// [`ApiError::Upstream`] when either upstream fetch fails.
pub async fn recommend_meals(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Recommendations>, ApiError> {
    serve_recommendations(&state, &query, ScanMode::Items)
        .await
        .map(Json)
}

/// `GET /recommendRestaurants?user_id=…`
///
/// # Errors
/// Returns [`ApiError::BadRequest`] for a missing or blank `user_id` and
/// [`ApiError::Upstream`] when either upstream fetch fails.
pub async fn recommend_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Recommendations>, ApiError> {
    serve_recommendations(&state, &query, ScanMode::Restaurants)
        .await
        .map(Json)
}

async fn serve_recommendations(
    state: &AppState,
    query: &RecommendQuery,
    mode: ScanMode,
) -> Result<Recommendations, ApiError> {
    let user_id = query
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("user_id query parameter is required".to_owned()))?;

    let (profile, catalog) = tokio::try_join!(
        state.source.user_profile(user_id),
        state.source.catalog()
    )?;

    let model = build_relevance_model(profile.cuisines());
    let recommendations = recommend(&profile, &catalog, &model, mode, state.result_limit);
    info!(
        user_id,
        ?mode,
        restaurants = catalog.len(),
        results = recommendations.len(),
        "served recommendations"
    );
    Ok(recommendations)
}
