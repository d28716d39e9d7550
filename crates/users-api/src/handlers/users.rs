// ============================================================================
// Users API - User Handlers
// File: crates/users-api/src/handlers/users.rs
// ============================================================================
//! CRUD handlers for `/users`. Each one gates, sanitizes and validates
//! through the user service, then maps the outcome to a status code.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use users_core::domain::{parse_user_id, RawUserInput, User};

use crate::error::ApiError;
use crate::response::{ChangesResponse, CreatedResponse, DataResponse};
use crate::state::AppState;

fn body(payload: Result<Json<RawUserInput>, JsonRejection>) -> Result<RawUserInput, ApiError> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
}

/// List users handler - GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<User>>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(DataResponse::new(users)))
}

/// Get user handler - GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<User>>, ApiError> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(DataResponse::new(user)))
}

/// Create user handler - POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<RawUserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let input = body(payload)?;
    let id = state.user_service.create_user(&input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User created successfully".to_string(),
            id,
        }),
    ))
}

/// Update user handler - PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RawUserInput>, JsonRejection>,
) -> Result<Json<ChangesResponse>, ApiError> {
    // The id gate runs before the body is looked at.
    let id = parse_user_id(&id)?;
    let input = body(payload)?;

    let changes = state
        .user_service
        .update_user(id, &input)
        .await
        .map_err(ApiError::from_mutation)?;

    Ok(Json(ChangesResponse::new("User updated successfully", changes)))
}

/// Delete user handler - DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let changes = state
        .user_service
        .delete_user(&id)
        .await
        .map_err(ApiError::from_mutation)?;

    Ok(Json(ChangesResponse::new("User deleted successfully", changes)))
}
