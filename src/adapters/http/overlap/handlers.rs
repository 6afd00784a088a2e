//! HTTP handlers for overlap analysis endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::adapters::http::common::{AuthenticatedUser, ErrorResponse};
use crate::application::handlers::{AnalyzeOverlapsHandler, AnalyzeOverlapsQuery};
use crate::domain::foundation::MoveDate;
use crate::domain::overlap::generate_overlap_summary;
use crate::ports::{HouseholdReader, HouseholdStoreError};

use super::dto::{OverlapAnalysis, SummaryResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Overlap API error that implements IntoResponse.
pub enum OverlapApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for OverlapApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            OverlapApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            OverlapApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<HouseholdStoreError> for OverlapApiError {
    fn from(error: HouseholdStoreError) -> Self {
        // The analysis endpoints only list the caller's own households;
        // anything the store reports is unexpected here.
        OverlapApiError::Internal(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing overlap analysis dependencies.
#[derive(Clone)]
pub struct OverlapAppState {
    pub reader: Arc<dyn HouseholdReader>,
}

impl OverlapAppState {
    pub fn analyze_handler(&self) -> AnalyzeOverlapsHandler {
        AnalyzeOverlapsHandler::new(self.reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the analysis endpoints.
#[derive(Debug, Deserialize)]
pub struct OverlapParams {
    /// Optional reference date (`YYYY-MM-DD`) for the timeline window;
    /// defaults to today.
    pub today: Option<String>,
}

fn parse_today(params: &OverlapParams) -> Result<Option<MoveDate>, OverlapApiError> {
    params
        .today
        .as_deref()
        .map(MoveDate::parse)
        .transpose()
        .map_err(|err| OverlapApiError::BadRequest(err.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/households/overlaps
///
/// Runs the overlap analysis over the caller's households.
pub async fn get_overlap_analysis(
    State(state): State<OverlapAppState>,
    Query(params): Query<OverlapParams>,
    user: AuthenticatedUser,
) -> Result<Json<OverlapAnalysis>, OverlapApiError> {
    let today = parse_today(&params)?;

    let analysis = state
        .analyze_handler()
        .handle(AnalyzeOverlapsQuery {
            user_id: user.user_id,
            today,
        })
        .await?;

    Ok(Json(analysis))
}

/// GET /api/households/overlaps/summary
///
/// Returns the analysis rendered as a German text block.
pub async fn get_overlap_summary(
    State(state): State<OverlapAppState>,
    Query(params): Query<OverlapParams>,
    user: AuthenticatedUser,
) -> Result<Json<SummaryResponse>, OverlapApiError> {
    let today = parse_today(&params)?;

    let analysis = state
        .analyze_handler()
        .handle(AnalyzeOverlapsQuery {
            user_id: user.user_id,
            today,
        })
        .await?;

    Ok(Json(SummaryResponse {
        summary: generate_overlap_summary(&analysis),
    }))
}
