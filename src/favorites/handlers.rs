// HTTP handlers for favorite endpoints
// The owning user always comes from the access token

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::favorites::models::{CreateFavoriteRequest, FavoriteResponse};
use crate::AppState;

/// List the caller's favorites
/// GET /favorites/
pub async fn list_favorites(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    let favorites = state.favorite_service.list(user.user_id).await?;

    Ok(Json(favorites))
}

/// Fetch one of the caller's favorites
/// GET /favorites/:id/
pub async fn get_favorite(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let favorite = state.favorite_service.get(user.user_id, id).await?;

    Ok(Json(favorite))
}

/// Mark a book as a favorite
/// POST /favorites/
pub async fn create_favorite(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateFavoriteRequest>,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    let favorite = state
        .favorite_service
        .create(user.user_id, request.book)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove one of the caller's favorites
/// DELETE /favorites/:id/
pub async fn delete_favorite(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.favorite_service.delete(user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
