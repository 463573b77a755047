// Authentication service - business logic layer

use crate::auth::{
    error::AuthError,
    models::{TokenPairResponse, User},
    password::PasswordService,
    repository::{TokenRepository, UserRepository},
    token::TokenService,
};

/// Authentication service coordinating all auth operations
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    tokens: TokenRepository,
    token_service: TokenService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(users: UserRepository, tokens: TokenRepository, token_service: TokenService) -> Self {
        Self {
            users,
            tokens,
            token_service,
        }
    }

    /// Register a new user and return a fresh token pair
    pub async fn register(&self, username: &str, password: &str) -> Result<TokenPairResponse, AuthError> {
        let password_hash = PasswordService::hash_password(password)?;
        let user = self.users.create_user(username, &password_hash).await?;

        tracing::info!("Registered new user: {}", user.username);
        self.issue_tokens(&user).await
    }

    /// Login a user
    ///
    /// Unknown username and wrong password both collapse into
    /// InvalidCredentials, so the two cases cannot be told apart
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPairResponse, AuthError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::debug!("Login successful for user: {}", user.username);
        self.issue_tokens(&user).await
    }

    /// Exchange a valid refresh token for a new token pair
    ///
    /// Rotation: the presented token is deleted before the new pair is
    /// stored, so each refresh token is usable at most once
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPairResponse, AuthError> {
        self.token_service.validate_refresh_token(refresh_token)?;

        let stored = self
            .tokens
            .verify_refresh_token(refresh_token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let user = self
            .users
            .find_by_id(stored.user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        self.tokens.invalidate_token(refresh_token).await?;
        self.issue_tokens(&user).await
    }

    async fn issue_tokens(&self, user: &User) -> Result<TokenPairResponse, AuthError> {
        let (access, refresh) = self
            .token_service
            .generate_token_pair(user.id, &user.username)?;

        self.tokens
            .store_refresh_token(user.id, &refresh, self.token_service.refresh_expiry())
            .await?;

        Ok(TokenPairResponse { access, refresh })
    }
}
