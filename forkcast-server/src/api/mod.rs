//! HTTP surface: routes, handlers, and error mapping.

pub mod errors;
pub mod handlers;

use axum::Router;
use axum::routing::get;

use handlers::AppState;

/// Path of the meal recommendation endpoint.
pub const MEALS_PATH: &str = "/recommendMeals";
/// Path of the restaurant recommendation endpoint.
pub const RESTAURANTS_PATH: &str = "/recommendRestaurants";

/// Build the router serving both recommendation endpoints.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(MEALS_PATH, get(handlers::recommend_meals))
        .route(RESTAURANTS_PATH, get(handlers::recommend_restaurants))
        .with_state(state)
}
