// HTTP handlers for authentication endpoints

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, RefreshRequest, RegisterRequest, TokenPairResponse},
};
use crate::AppState;
use axum::{extract::State, Json};
use validator::Validate;

/// Register a new user
/// POST /register/
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenPairResponse>, AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    let tokens = state
        .auth_service
        .register(&request.username, &request.password)
        .await?;

    Ok(Json(tokens))
}

/// Login a user
/// POST /login/
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenPairResponse>, AuthError> {
    let tokens = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(tokens))
}

/// Exchange a refresh token for a new token pair
/// POST /refresh/
pub async fn refresh_handler(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<TokenPairResponse>, AuthError> {
    let tokens = state.auth_service.refresh(&request.refresh).await?;

    Ok(Json(tokens))
}
