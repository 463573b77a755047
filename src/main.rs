mod auth;
mod authors;
mod books;
mod db;
mod error;
mod favorites;
mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::repository::{TokenRepository, UserRepository};
use auth::service::AuthService;
use auth::token::TokenService;
use authors::models::{Author, CreateAuthorRequest, UpdateAuthorRequest};
use books::models::{BookResponse, CreateBookRequest, UpdateBookRequest};
use books::repository::BookRepository;
use books::service::BookService;
use favorites::models::{CreateFavoriteRequest, FavoriteResponse};
use favorites::repository::FavoriteRepository;
use favorites::service::FavoriteService;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        books::handlers::list_books,
        books::handlers::recommended_books,
        books::handlers::get_book,
        books::handlers::create_book,
        books::handlers::update_book,
        books::handlers::delete_book,
        authors::handlers::list_authors,
        authors::handlers::get_author,
        authors::handlers::create_author,
        authors::handlers::update_author,
        authors::handlers::delete_author,
    ),
    components(
        schemas(
            Author,
            CreateAuthorRequest,
            UpdateAuthorRequest,
            BookResponse,
            CreateBookRequest,
            UpdateBookRequest,
            FavoriteResponse,
            CreateFavoriteRequest,
        )
    ),
    tags(
        (name = "books", description = "Book catalog endpoints"),
        (name = "authors", description = "Author management endpoints")
    ),
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "RESTful API for a book catalog with per-user favorites and recommendations"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth_service: AuthService,
    pub book_service: BookService,
    pub favorite_service: FavoriteService,
}

impl AppState {
    /// Wire repositories and services over a connection pool
    pub fn new(db: PgPool, jwt_secret: String) -> Self {
        let auth_service = AuthService::new(
            UserRepository::new(db.clone()),
            TokenRepository::new(db.clone()),
            TokenService::new(jwt_secret),
        );
        let book_service = BookService::new(BookRepository::new(db.clone()));
        let favorite_service = FavoriteService::new(FavoriteRepository::new(db.clone()));

        Self {
            db,
            auth_service,
            book_service,
            favorite_service,
        }
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router(db: PgPool, jwt_secret: String) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let state = AppState::new(db, jwt_secret);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Authentication
        .route("/register/", post(auth::handlers::register_handler))
        .route("/login/", post(auth::handlers::login_handler))
        .route("/refresh/", post(auth::handlers::refresh_handler))
        // Books
        .route(
            "/books/",
            get(books::handlers::list_books).post(books::handlers::create_book),
        )
        .route(
            "/books/recommendations/",
            get(books::handlers::recommended_books),
        )
        .route(
            "/books/:id/",
            get(books::handlers::get_book)
                .put(books::handlers::update_book)
                .patch(books::handlers::update_book)
                .delete(books::handlers::delete_book),
        )
        // Authors
        .route(
            "/authors/",
            get(authors::handlers::list_authors).post(authors::handlers::create_author),
        )
        .route(
            "/authors/:id/",
            get(authors::handlers::get_author)
                .put(authors::handlers::update_author)
                .patch(authors::handlers::update_author)
                .delete(authors::handlers::delete_author),
        )
        // Favorites
        .route(
            "/favorites/",
            get(favorites::handlers::list_favorites).post(favorites::handlers::create_favorite),
        )
        .route(
            "/favorites/:id/",
            get(favorites::handlers::get_favorite).delete(favorites::handlers::delete_favorite),
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Bookshelf API - Starting...");

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let app = create_router(db_pool, jwt_secret);

    let addr = format!("{}:{}", host, port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Bookshelf API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(test)]
mod tests;
