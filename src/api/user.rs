//! User registration and lookup endpoints

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{validate_candidate, Candidate, UserRecord};

/// Create the user router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/fetch", get(fetch_user))
}

/// Query parameters for the fetch endpoint
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    #[serde(rename = "userName")]
    pub user_name: String,
}

/// Register a new user
///
/// POST /api/user/register
///
/// Validates the candidate, persists it, and returns the stored record with
/// its assigned id. The password never appears in the response. Validation
/// failures return 400 with a field -> message map.
pub async fn register_user(
    State(state): State<AppState>,
    Json(candidate): Json<Candidate>,
) -> Result<Json<UserRecord>, ApiError> {
    let record = validate_candidate(&candidate).map_err(ApiError::validation)?;

    let saved = state.user_service.register_user(record).await?;

    Ok(Json(saved))
}

/// Fetch a user by username
///
/// GET /api/user/fetch?userName=<name>
///
/// Returns the record without the password, 404 when no user matches.
pub async fn fetch_user(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> Result<Json<UserRecord>, ApiError> {
    let user = state
        .user_service
        .fetch_user_by_user_name(&params.user_name)
        .await?;

    match user {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::not_found("User not found.")),
    }
}
