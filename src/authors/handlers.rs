// HTTP handlers for author endpoints
// Plain CRUD: handlers talk to the database directly, no service layer

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::authors::models::{Author, CreateAuthorRequest, UpdateAuthorRequest};
use crate::error::ApiError;
use crate::AppState;

/// Handler for GET /authors/
#[utoipa::path(
    get,
    path = "/authors/",
    responses(
        (status = 200, description = "List of all authors", body = Vec<Author>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "authors"
)]
pub async fn list_authors(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Author>>, ApiError> {
    let authors = sqlx::query_as::<_, Author>("SELECT id, name, biography FROM authors ORDER BY id")
        .fetch_all(&state.db)
        .await?;

    tracing::debug!("Retrieved {} authors", authors.len());
    Ok(Json(authors))
}

/// Handler for GET /authors/:id/
#[utoipa::path(
    get,
    path = "/authors/{id}/",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author found", body = Author),
        (status = 404, description = "Author not found")
    ),
    tag = "authors"
)]
pub async fn get_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<Author>, ApiError> {
    let author =
        sqlx::query_as::<_, Author>("SELECT id, name, biography FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&state.db)
            .await?
            .ok_or(ApiError::NotFound { resource: "Author", id })?;

    Ok(Json(author))
}

/// Handler for POST /authors/
#[utoipa::path(
    post,
    path = "/authors/",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created successfully", body = Author),
        (status = 400, description = "Invalid input data")
    ),
    tag = "authors"
)]
pub async fn create_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    tracing::debug!("Creating new author: {}", payload.name);
    payload.validate()?;

    let author = sqlx::query_as::<_, Author>(
        "INSERT INTO authors (name, biography) VALUES ($1, $2) RETURNING id, name, biography",
    )
    .bind(&payload.name)
    .bind(&payload.biography)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Successfully created author with id: {}", author.id);
    Ok((StatusCode::CREATED, Json(author)))
}

/// Handler for PUT/PATCH /authors/:id/
/// Omitted fields keep their stored values
#[utoipa::path(
    put,
    path = "/authors/{id}/",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "Author updated successfully", body = Author),
        (status = 404, description = "Author not found")
    ),
    tag = "authors"
)]
pub async fn update_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAuthorRequest>,
) -> Result<Json<Author>, ApiError> {
    payload.validate()?;

    let existing =
        sqlx::query_as::<_, Author>("SELECT id, name, biography FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&state.db)
            .await?
            .ok_or(ApiError::NotFound { resource: "Author", id })?;

    let author = sqlx::query_as::<_, Author>(
        "UPDATE authors SET name = $1, biography = $2 WHERE id = $3 RETURNING id, name, biography",
    )
    .bind(payload.name.unwrap_or(existing.name))
    .bind(payload.biography.or(existing.biography))
    .bind(id)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Successfully updated author with id: {}", id);
    Ok(Json(author))
}

/// Handler for DELETE /authors/:id/
/// Cascades: the author's books, and favorites pointing at them, go too
#[utoipa::path(
    delete,
    path = "/authors/{id}/",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted successfully"),
        (status = 404, description = "Author not found")
    ),
    tag = "authors"
)]
pub async fn delete_author(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query("DELETE FROM authors WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound { resource: "Author", id });
    }

    tracing::info!("Successfully deleted author with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
