use sqlx::PgPool;

use crate::error::ApiError;
use crate::favorites::models::UserFavorite;

/// Repository for database operations on favorites
///
/// Every read and delete is scoped by user id, so rows belonging to other
/// users behave exactly like rows that do not exist
#[derive(Clone)]
pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    /// Create a new FavoriteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All favorites belonging to a user, id order
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<UserFavorite>, ApiError> {
        let favorites = sqlx::query_as::<_, UserFavorite>(
            "SELECT id, user_id, book_id FROM user_favorites WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    /// A favorite by id, visible only to its owner
    pub async fn find_scoped(&self, id: i32, user_id: i32) -> Result<Option<UserFavorite>, ApiError> {
        let favorite = sqlx::query_as::<_, UserFavorite>(
            "SELECT id, user_id, book_id FROM user_favorites WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(favorite)
    }

    /// Insert a favorite; the (user, book) unique constraint settles
    /// concurrent duplicates atomically
    pub async fn create(&self, user_id: i32, book_id: i32) -> Result<UserFavorite, ApiError> {
        let favorite = sqlx::query_as::<_, UserFavorite>(
            "INSERT INTO user_favorites (user_id, book_id) VALUES ($1, $2) \
             RETURNING id, user_id, book_id",
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return ApiError::Conflict(format!(
                        "Book with id {} is already a favorite",
                        book_id
                    ));
                }
            }
            ApiError::Database(e)
        })?;

        Ok(favorite)
    }

    /// Delete a favorite owned by the user; returns the number of rows removed
    pub async fn delete_scoped(&self, id: i32, user_id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM user_favorites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Check that a book exists (foreign key pre-check for create)
    pub async fn book_exists(&self, book_id: i32) -> Result<bool, ApiError> {
        let exists: Option<bool> = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists.unwrap_or(false))
    }
}
