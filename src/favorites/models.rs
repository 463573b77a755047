use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Favorite row: a user-to-book marker
#[derive(Debug, Clone, FromRow)]
pub struct UserFavorite {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
}

/// Wire representation of a favorite
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user: i32,
    pub book: i32,
}

impl From<UserFavorite> for FavoriteResponse {
    fn from(favorite: UserFavorite) -> Self {
        Self {
            id: favorite.id,
            user: favorite.user_id,
            book: favorite.book_id,
        }
    }
}

/// Request DTO for creating a favorite; the owning user comes from the
/// token, never from the body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFavoriteRequest {
    pub book: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_serialization_uses_wire_names() {
        let favorite = UserFavorite {
            id: 9,
            user_id: 2,
            book_id: 5,
        };

        let json = serde_json::to_value(FavoriteResponse::from(favorite)).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["user"], 2);
        assert_eq!(json["book"], 5);
    }

    #[test]
    fn test_create_favorite_deserialization() {
        let request: CreateFavoriteRequest = serde_json::from_str(r#"{"book": 12}"#).unwrap();
        assert_eq!(request.book, 12);
    }
}
