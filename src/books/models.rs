use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::authors::models::Author;

/// Flat row produced by the books-to-authors join
///
/// Every book read goes through the join so the wire shape can nest the
/// full author object
#[derive(Debug, Clone, FromRow)]
pub struct BookRecord {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub published_date: NaiveDate,
    pub author_id: i32,
    pub author_name: String,
    pub author_biography: Option<String>,
}

/// Wire representation of a book with its author nested
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Harry Potter")]
    pub title: String,
    pub description: Option<String>,
    pub published_date: NaiveDate,
    pub author: Author,
}

impl From<BookRecord> for BookResponse {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            published_date: record.published_date,
            author: Author {
                id: record.author_id,
                name: record.author_name,
                biography: record.author_biography,
            },
        }
    }
}

/// Request DTO for creating a new book
/// `author` is the id of an existing author
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[validate(
        length(min = 1, max = 255),
        custom = "crate::validation::validate_not_blank"
    )]
    #[schema(example = "Harry Potter")]
    pub title: String,
    #[schema(example = 1)]
    pub author: i32,
    pub description: Option<String>,
    pub published_date: NaiveDate,
}

/// Request DTO for updating a book; all fields optional for partial updates
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBookRequest {
    #[validate(
        length(min = 1, max = 255),
        custom = "crate::validation::validate_not_blank"
    )]
    pub title: Option<String>,
    pub author: Option<i32>,
    pub description: Option<String>,
    pub published_date: Option<NaiveDate>,
}

/// Query parameters for GET /books/
#[derive(Debug, Deserialize)]
pub struct BookListParams {
    /// Case-insensitive substring matched against title or author name
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_response_nests_author() {
        let record = BookRecord {
            id: 3,
            title: "Harry Potter".to_string(),
            description: None,
            published_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            author_id: 7,
            author_name: "J.K. Rowling".to_string(),
            author_biography: Some("Famous author".to_string()),
        };

        let response = BookResponse::from(record);
        let json = serde_json::to_value(&response).expect("Failed to serialize BookResponse");

        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Harry Potter");
        assert_eq!(json["published_date"], "2000-01-01");
        // The author is a nested object, not a bare id
        assert_eq!(json["author"]["id"], 7);
        assert_eq!(json["author"]["name"], "J.K. Rowling");
        assert_eq!(json["author"]["biography"], "Famous author");
    }

    #[test]
    fn test_create_book_deserialization() {
        let json = r#"{
            "title": "New Book",
            "author": 1,
            "published_date": "2024-01-01"
        }"#;

        let request: CreateBookRequest =
            serde_json::from_str(json).expect("Failed to deserialize CreateBookRequest");

        assert_eq!(request.title, "New Book");
        assert_eq!(request.author, 1);
        assert_eq!(request.description, None);
        assert_eq!(
            request.published_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_create_book_requires_published_date() {
        let json = r#"{"title": "New Book", "author": 1}"#;

        let result = serde_json::from_str::<CreateBookRequest>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_book_empty_body() {
        let request: UpdateBookRequest =
            serde_json::from_str("{}").expect("Failed to deserialize UpdateBookRequest");

        assert_eq!(request.title, None);
        assert_eq!(request.author, None);
        assert_eq!(request.description, None);
        assert_eq!(request.published_date, None);
    }
}
