use sqlx::PgPool;

use crate::books::models::BookRecord;
use crate::error::ApiError;

const BOOK_SELECT: &str = "SELECT b.id, b.title, b.description, b.published_date, \
     a.id AS author_id, a.name AS author_name, a.biography AS author_biography \
     FROM books b JOIN authors a ON a.id = b.author_id";

/// Repository for database operations on books
#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Create a new BookRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All books in id order
    pub async fn find_all(&self) -> Result<Vec<BookRecord>, ApiError> {
        let books = sqlx::query_as::<_, BookRecord>(&format!("{} ORDER BY b.id", BOOK_SELECT))
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Books whose title or author name contains the query, case-insensitive
    pub async fn search(&self, query: &str) -> Result<Vec<BookRecord>, ApiError> {
        let pattern = format!("%{}%", query);

        let books = sqlx::query_as::<_, BookRecord>(&format!(
            "{} WHERE b.title ILIKE $1 OR a.name ILIKE $1 ORDER BY b.id",
            BOOK_SELECT
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Find a book by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BookRecord>, ApiError> {
        let book = sqlx::query_as::<_, BookRecord>(&format!("{} WHERE b.id = $1", BOOK_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    /// Insert a new book and return it with its author joined
    pub async fn create(
        &self,
        title: &str,
        author_id: i32,
        description: Option<&str>,
        published_date: chrono::NaiveDate,
    ) -> Result<BookRecord, ApiError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO books (title, author_id, description, published_date) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(title)
        .bind(author_id)
        .bind(description)
        .bind(published_date)
        .fetch_one(&self.pool)
        .await?;

        let book = sqlx::query_as::<_, BookRecord>(&format!("{} WHERE b.id = $1", BOOK_SELECT))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(book)
    }

    /// Overwrite a book's fields and return the updated row with its author
    pub async fn update(
        &self,
        id: i32,
        title: &str,
        author_id: i32,
        description: Option<&str>,
        published_date: chrono::NaiveDate,
    ) -> Result<BookRecord, ApiError> {
        sqlx::query(
            "UPDATE books SET title = $1, author_id = $2, description = $3, published_date = $4 \
             WHERE id = $5",
        )
        .bind(title)
        .bind(author_id)
        .bind(description)
        .bind(published_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        let book = sqlx::query_as::<_, BookRecord>(&format!("{} WHERE b.id = $1", BOOK_SELECT))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(book)
    }

    /// Delete a book; returns the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Up to `limit` books not in the user's favorite set, id order
    pub async fn find_not_favorited(
        &self,
        user_id: i32,
        limit: i64,
    ) -> Result<Vec<BookRecord>, ApiError> {
        let books = sqlx::query_as::<_, BookRecord>(&format!(
            "{} WHERE b.id NOT IN (SELECT book_id FROM user_favorites WHERE user_id = $1) \
             ORDER BY b.id LIMIT $2",
            BOOK_SELECT
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Check that an author exists (foreign key pre-check for create/update)
    pub async fn author_exists(&self, author_id: i32) -> Result<bool, ApiError> {
        let exists: Option<bool> = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists.unwrap_or(false))
    }
}
