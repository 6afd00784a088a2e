//! HTTP handlers for household endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::common::{AuthenticatedUser, ErrorResponse};
use crate::application::handlers::{
    CreateHouseholdCommand, CreateHouseholdHandler, DeleteHouseholdCommand,
    DeleteHouseholdHandler, GetHouseholdHandler, GetHouseholdQuery, HouseholdCommandError,
    ListHouseholdsHandler, ListHouseholdsQuery, UpdateHouseholdCommand, UpdateHouseholdHandler,
};
use crate::domain::foundation::{HouseholdId, MoveDate, ValidationError};
use crate::domain::household::Member;
use crate::ports::{HouseholdReader, HouseholdRepository, HouseholdStoreError};

use super::dto::{HouseholdListResponse, HouseholdRequest, HouseholdResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Household API error that implements IntoResponse.
pub enum HouseholdApiError {
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    Internal(String),
}

impl IntoResponse for HouseholdApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            HouseholdApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            HouseholdApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Household", &msg))
            }
            HouseholdApiError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, ErrorResponse::forbidden(msg))
            }
            HouseholdApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<HouseholdStoreError> for HouseholdApiError {
    fn from(error: HouseholdStoreError) -> Self {
        match error {
            HouseholdStoreError::NotFound(id) => HouseholdApiError::NotFound(id.to_string()),
            HouseholdStoreError::AlreadyExists(id) => {
                HouseholdApiError::BadRequest(format!("Household {} already exists", id))
            }
            HouseholdStoreError::Unauthorized => {
                HouseholdApiError::Forbidden("You do not have access to this household".to_string())
            }
            HouseholdStoreError::InvalidInput(msg) => HouseholdApiError::BadRequest(msg),
            HouseholdStoreError::Storage(msg) => {
                HouseholdApiError::Internal(format!("Storage error: {}", msg))
            }
        }
    }
}

impl From<HouseholdCommandError> for HouseholdApiError {
    fn from(error: HouseholdCommandError) -> Self {
        match error {
            HouseholdCommandError::Domain(err) => HouseholdApiError::BadRequest(err.to_string()),
            HouseholdCommandError::Store(err) => err.into(),
        }
    }
}

impl From<ValidationError> for HouseholdApiError {
    fn from(error: ValidationError) -> Self {
        HouseholdApiError::BadRequest(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing household dependencies.
#[derive(Clone)]
pub struct HouseholdAppState {
    pub repository: Arc<dyn HouseholdRepository>,
    pub reader: Arc<dyn HouseholdReader>,
}

impl HouseholdAppState {
    pub fn create_handler(&self) -> CreateHouseholdHandler {
        CreateHouseholdHandler::new(self.repository.clone())
    }

    pub fn update_handler(&self) -> UpdateHouseholdHandler {
        UpdateHouseholdHandler::new(self.reader.clone(), self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteHouseholdHandler {
        DeleteHouseholdHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetHouseholdHandler {
        GetHouseholdHandler::new(self.reader.clone())
    }

    pub fn list_handler(&self) -> ListHouseholdsHandler {
        ListHouseholdsHandler::new(self.reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request parsing
// ════════════════════════════════════════════════════════════════════════════════

struct ParsedRequest {
    name: String,
    move_date: MoveDate,
    household_size: u32,
    old_address: Option<String>,
    new_address: Option<String>,
    members: Vec<Member>,
}

fn parse_request(request: HouseholdRequest) -> Result<ParsedRequest, HouseholdApiError> {
    let move_date = MoveDate::parse(&request.move_date)?;
    let members = request
        .members
        .into_iter()
        .map(|m| m.into_member())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedRequest {
        name: request.name,
        move_date,
        household_size: request.household_size,
        old_address: request.old_address,
        new_address: request.new_address,
        members,
    })
}

fn parse_household_id(raw: &str) -> Result<HouseholdId, HouseholdApiError> {
    raw.parse()
        .map_err(|_| HouseholdApiError::BadRequest("Invalid household ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/households
pub async fn create_household(
    State(state): State<HouseholdAppState>,
    user: AuthenticatedUser,
    Json(request): Json<HouseholdRequest>,
) -> Result<(StatusCode, Json<HouseholdResponse>), HouseholdApiError> {
    let parsed = parse_request(request)?;

    let command = CreateHouseholdCommand {
        user_id: user.user_id,
        name: parsed.name,
        move_date: parsed.move_date,
        household_size: parsed.household_size,
        old_address: parsed.old_address,
        new_address: parsed.new_address,
        members: parsed.members,
    };

    let household = state.create_handler().handle(command).await?;
    Ok((StatusCode::CREATED, Json(HouseholdResponse::from(&household))))
}

/// GET /api/households
pub async fn list_households(
    State(state): State<HouseholdAppState>,
    user: AuthenticatedUser,
) -> Result<Json<HouseholdListResponse>, HouseholdApiError> {
    let households = state
        .list_handler()
        .handle(ListHouseholdsQuery { user_id: user.user_id })
        .await?;

    Ok(Json(HouseholdListResponse {
        households: households.iter().map(HouseholdResponse::from).collect(),
    }))
}

/// GET /api/households/:household_id
pub async fn get_household(
    State(state): State<HouseholdAppState>,
    Path(household_id_str): Path<String>,
    user: AuthenticatedUser,
) -> Result<Json<HouseholdResponse>, HouseholdApiError> {
    let household_id = parse_household_id(&household_id_str)?;

    let household = state
        .get_handler()
        .handle(GetHouseholdQuery {
            household_id,
            user_id: user.user_id,
        })
        .await?;

    Ok(Json(HouseholdResponse::from(&household)))
}

/// PUT /api/households/:household_id
pub async fn update_household(
    State(state): State<HouseholdAppState>,
    Path(household_id_str): Path<String>,
    user: AuthenticatedUser,
    Json(request): Json<HouseholdRequest>,
) -> Result<Json<HouseholdResponse>, HouseholdApiError> {
    let household_id = parse_household_id(&household_id_str)?;
    let parsed = parse_request(request)?;

    let command = UpdateHouseholdCommand {
        household_id,
        user_id: user.user_id,
        name: parsed.name,
        move_date: parsed.move_date,
        household_size: parsed.household_size,
        old_address: parsed.old_address,
        new_address: parsed.new_address,
        members: parsed.members,
    };

    let household = state.update_handler().handle(command).await?;
    Ok(Json(HouseholdResponse::from(&household)))
}

/// DELETE /api/households/:household_id
pub async fn delete_household(
    State(state): State<HouseholdAppState>,
    Path(household_id_str): Path<String>,
    user: AuthenticatedUser,
) -> Result<StatusCode, HouseholdApiError> {
    let household_id = parse_household_id(&household_id_str)?;

    state
        .delete_handler()
        .handle(DeleteHouseholdCommand {
            household_id,
            user_id: user.user_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
