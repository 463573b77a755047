// Password hashing and verification

use crate::auth::error::AuthError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Password service for hashing and verification
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id with a per-hash random salt
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHash)
    }

    /// Verify a password against a stored hash
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = PasswordService::hash_password("correct horse battery").unwrap();
        assert!(PasswordService::verify_password("correct horse battery", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = PasswordService::hash_password("correct horse battery").unwrap();
        assert!(!PasswordService::verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = PasswordService::hash_password("hunter22").unwrap();
        assert!(!hash.contains("hunter22"));
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Random salt: two hashes of one password must differ
        let first = PasswordService::hash_password("samepassword").unwrap();
        let second = PasswordService::hash_password("samepassword").unwrap();
        assert_ne!(first, second);
        assert!(PasswordService::verify_password("samepassword", &first).unwrap());
        assert!(PasswordService::verify_password("samepassword", &second).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(PasswordService::verify_password("anything", "not-a-phc-string").is_err());
    }
}
