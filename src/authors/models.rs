use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Represents an author in the database
///
/// Doubles as the wire representation: authors carry no private fields,
/// and books embed this object whole on read
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "J.K. Rowling")]
    pub name: String,
    #[schema(example = "Famous author")]
    pub biography: Option<String>,
}

/// Request DTO for creating a new author
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAuthorRequest {
    #[validate(
        length(min = 1, max = 255),
        custom = "crate::validation::validate_not_blank"
    )]
    #[schema(example = "Ursula K. Le Guin")]
    pub name: String,
    pub biography: Option<String>,
}

/// Request DTO for updating an author; all fields optional for partial updates
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthorRequest {
    #[validate(
        length(min = 1, max = 255),
        custom = "crate::validation::validate_not_blank"
    )]
    pub name: Option<String>,
    pub biography: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_serialization() {
        let author = Author {
            id: 1,
            name: "J.K. Rowling".to_string(),
            biography: Some("Famous author".to_string()),
        };

        let json = serde_json::to_string(&author).expect("Failed to serialize Author");

        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"name\":\"J.K. Rowling\""));
        assert!(json.contains("\"biography\":\"Famous author\""));
    }

    #[test]
    fn test_create_author_without_biography() {
        let json = r#"{"name": "Frank Herbert"}"#;

        let request: CreateAuthorRequest =
            serde_json::from_str(json).expect("Failed to deserialize CreateAuthorRequest");

        assert_eq!(request.name, "Frank Herbert");
        assert_eq!(request.biography, None);
    }

    #[test]
    fn test_update_author_partial_fields() {
        let json = r#"{"biography": "Wrote Dune"}"#;

        let request: UpdateAuthorRequest =
            serde_json::from_str(json).expect("Failed to deserialize UpdateAuthorRequest");

        assert_eq!(request.name, None);
        assert_eq!(request.biography, Some("Wrote Dune".to_string()));
    }
}
