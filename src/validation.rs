// Validation utilities module
// Provides custom validation functions for domain-specific rules

use validator::ValidationError;

/// Validates that a username contains only letters, digits, '_', '-' or '.'
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username"))
    }
}

/// Validates that a required text field is not just whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("must_not_be_blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["alice", "bob_42", "jo.doe", "kim-lee", "用户"] {
            assert!(validate_username(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_usernames() {
        for name in ["has space", "semi;colon", "at@sign", "slash/"] {
            assert!(validate_username(name).is_err(), "{} should be invalid", name);
        }
    }

    #[test]
    fn test_blank_values_rejected() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
        assert!(validate_not_blank("Dune").is_ok());
    }
}
