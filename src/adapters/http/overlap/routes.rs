//! HTTP routes for overlap analysis endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_overlap_analysis, get_overlap_summary, OverlapAppState};

/// Creates the overlap analysis router with all routes.
pub fn overlap_routes(state: OverlapAppState) -> Router {
    Router::new()
        // GET /api/households/overlaps
        .route("/api/households/overlaps", get(get_overlap_analysis))
        // GET /api/households/overlaps/summary
        .route("/api/households/overlaps/summary", get(get_overlap_summary))
        .with_state(state)
}
