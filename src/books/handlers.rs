// HTTP handlers for book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::books::models::{BookListParams, BookResponse, CreateBookRequest, UpdateBookRequest};
use crate::error::ApiError;
use crate::AppState;

/// Handler for GET /books/
/// Returns all books, or only those matching `?search=` on title or author name
#[utoipa::path(
    get,
    path = "/books/",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring matched against title or author name")
    ),
    responses(
        (status = 200, description = "List of books with nested authors", body = Vec<BookResponse>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "books"
)]
pub async fn list_books(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<BookListParams>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.book_service.list(params.search.as_deref()).await?;

    tracing::debug!("Retrieved {} books", books.len());
    Ok(Json(books))
}

/// Handler for GET /books/recommendations/
/// Up to 5 books the caller has not favorited
#[utoipa::path(
    get,
    path = "/books/recommendations/",
    responses(
        (status = 200, description = "Up to 5 non-favorited books", body = Vec<BookResponse>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "books"
)]
pub async fn recommended_books(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.book_service.recommendations(user.user_id).await?;

    Ok(Json(books))
}

/// Handler for GET /books/:id/
#[utoipa::path(
    get,
    path = "/books/{id}/",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found")
    ),
    tag = "books"
)]
pub async fn get_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.book_service.get(id).await?;

    Ok(Json(book))
}

/// Handler for POST /books/
#[utoipa::path(
    post,
    path = "/books/",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created successfully", body = BookResponse),
        (status = 400, description = "Invalid input data or unknown author id")
    ),
    tag = "books"
)]
pub async fn create_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    tracing::debug!("Creating new book: {}", payload.title);

    let book = state.book_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// Handler for PUT/PATCH /books/:id/
#[utoipa::path(
    put,
    path = "/books/{id}/",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated successfully", body = BookResponse),
        (status = 404, description = "Book not found")
    ),
    tag = "books"
)]
pub async fn update_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.book_service.update(id, payload).await?;

    Ok(Json(book))
}

/// Handler for DELETE /books/:id/
#[utoipa::path(
    delete,
    path = "/books/{id}/",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted successfully"),
        (status = 404, description = "Book not found")
    ),
    tag = "books"
)]
pub async fn delete_book(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.book_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
