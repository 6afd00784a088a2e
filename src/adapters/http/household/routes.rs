//! HTTP routes for household endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_household, delete_household, get_household, list_households, update_household,
    HouseholdAppState,
};

/// Creates the household router with all routes.
pub fn household_routes(state: HouseholdAppState) -> Router {
    Router::new()
        // GET/POST /api/households
        .route("/api/households", get(list_households).post(create_household))
        // GET/PUT/DELETE /api/households/:household_id
        .route(
            "/api/households/:household_id",
            get(get_household).put(update_household).delete(delete_household),
        )
        .with_state(state)
}
