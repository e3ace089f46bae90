use axum::extract::{Json, Path, State};
use contracts::system::auth::{LoginRequest, LoginResponse, MessageResponse};

use crate::routes::AppState;
use crate::shared::api_error::ApiError;
use crate::system::users::service as user_service;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let uid = state
        .authenticator
        .authenticate(&request.username, &request.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login rejected for '{}'", request.username);
            ApiError::Unauthorized("Invalid credentials".to_string())
        })?;

    let user = user_service::get_by_id(state.source.as_ref(), uid)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    tracing::info!("User '{}' logged in (uid={})", user.username, uid);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: Some(user),
    }))
}

/// POST /api/auth/logout
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        success: true,
        message: "Logout successful".to_string(),
    })
}

/// GET /api/auth/user/:id
pub async fn user_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LoginResponse>, ApiError> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid user ID".to_string()))?;

    let user = user_service::get_by_id(state.source.as_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(LoginResponse {
        success: true,
        message: "User info retrieved successfully".to_string(),
        user: Some(user),
    }))
}
