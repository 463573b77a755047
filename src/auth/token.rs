// JWT token generation and validation service

use crate::auth::error::AuthError;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// user id
    pub sub: i32,
    pub username: String,
    /// expiration timestamp
    pub exp: i64,
    /// issued at timestamp
    pub iat: i64,
}

/// Token service for JWT operations
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    access_token_duration: i64,
    refresh_token_duration: i64,
}

impl TokenService {
    /// Create a new TokenService with secret key
    /// Access tokens expire in 15 minutes, refresh tokens in 7 days
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            access_token_duration: 900,
            refresh_token_duration: 604_800,
        }
    }

    /// Generate an access token (15 minutes)
    pub fn generate_access_token(&self, user_id: i32, username: &str) -> Result<String, AuthError> {
        self.generate_token(user_id, username, self.access_token_duration)
    }

    /// Generate a refresh token (7 days)
    pub fn generate_refresh_token(
        &self,
        user_id: i32,
        username: &str,
    ) -> Result<String, AuthError> {
        self.generate_token(user_id, username, self.refresh_token_duration)
    }

    fn generate_token(
        &self,
        user_id: i32,
        username: &str,
        duration: i64,
    ) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now,
            exp: now + duration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Validate an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.validate_token(token)
    }

    /// Validate a refresh token
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.validate_token(token)
    }

    fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }

    /// Generate both access and refresh tokens
    pub fn generate_token_pair(
        &self,
        user_id: i32,
        username: &str,
    ) -> Result<(String, String), AuthError> {
        let access_token = self.generate_access_token(user_id, username)?;
        let refresh_token = self.generate_refresh_token(user_id, username)?;
        Ok((access_token, refresh_token))
    }

    /// Expiry instant for a refresh token issued now, used when persisting it
    pub fn refresh_expiry(&self) -> DateTime<Utc> {
        Utc::now() + chrono::Duration::seconds(self.refresh_token_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn test_access_token_expiration_is_15_minutes() {
        let service = test_token_service();
        let token = service.generate_access_token(1, "testuser").unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        let duration = claims.exp - claims.iat;
        assert_eq!(duration, 900);
    }

    #[test]
    fn test_refresh_token_expiration_is_7_days() {
        let service = test_token_service();
        let token = service.generate_refresh_token(1, "testuser").unwrap();
        let claims = service.validate_refresh_token(&token).unwrap();

        let duration = claims.exp - claims.iat;
        assert_eq!(duration, 604_800);
    }

    #[test]
    fn test_token_claims_contain_user_identity() {
        let service = test_token_service();
        let user_id = 42;
        let username = "reader42";

        let access_token = service.generate_access_token(user_id, username).unwrap();
        let access_claims = service.validate_access_token(&access_token).unwrap();
        assert_eq!(access_claims.sub, user_id);
        assert_eq!(access_claims.username, username);

        let refresh_token = service.generate_refresh_token(user_id, username).unwrap();
        let refresh_claims = service.validate_refresh_token(&refresh_token).unwrap();
        assert_eq!(refresh_claims.sub, user_id);
        assert_eq!(refresh_claims.username, username);
    }

    #[test]
    fn test_generate_token_pair() {
        let service = test_token_service();
        let (access_token, refresh_token) = service.generate_token_pair(1, "testuser").unwrap();

        assert!(service.validate_access_token(&access_token).is_ok());
        assert!(service.validate_refresh_token(&refresh_token).is_ok());

        // Different expiries make the tokens distinct
        assert_ne!(access_token, refresh_token);
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.validate_access_token("").is_err());
        assert!(service.validate_access_token("not.a.token").is_err());
        assert!(service.validate_access_token("invalid_token_format").is_err());
        assert!(service
            .validate_access_token("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn test_token_signature_verification() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1.generate_access_token(1, "testuser").unwrap();

        assert!(service1.validate_access_token(&token).is_ok());
        assert!(service2.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_reports_expiry() {
        let service = test_token_service();
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: 1,
            username: "testuser".to_string(),
            iat: now - 1000,
            exp: now - 500,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        let result = service.validate_access_token(&token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    proptest! {
        #[test]
        fn prop_token_claims_contain_identity(
            user_id in 1i32..1_000_000,
            username in "[a-z][a-z0-9_]{2,20}"
        ) {
            let service = test_token_service();

            let token = service.generate_access_token(user_id, &username)?;
            let claims = service.validate_access_token(&token)?;
            prop_assert_eq!(claims.sub, user_id);
            prop_assert_eq!(claims.username, username);
        }

        #[test]
        fn prop_valid_tokens_are_accepted(
            user_id in 1i32..1_000_000,
            username in "[a-z][a-z0-9_]{2,20}"
        ) {
            let service = test_token_service();

            let access_token = service.generate_access_token(user_id, &username)?;
            prop_assert!(service.validate_access_token(&access_token).is_ok());

            let refresh_token = service.generate_refresh_token(user_id, &username)?;
            prop_assert!(service.validate_refresh_token(&refresh_token).is_ok());
        }

        #[test]
        fn prop_malformed_tokens_rejected(
            malformed in "[a-zA-Z0-9]{10,50}"
        ) {
            let service = test_token_service();

            prop_assert!(service.validate_access_token(&malformed).is_err());
        }
    }
}
