//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("User ID contains invalid character: '{0}'")]
    InvalidIdCharacter(char),

    #[error("Username must be between {min} and {max} characters")]
    UsernameLength { min: usize, max: usize },

    #[error("Username contains invalid character: '{0}'. Only letters, digits, underscores and hyphens are allowed")]
    InvalidUsernameCharacter(char),

    #[error("Password must be between {min} and {max} characters")]
    PasswordLength { min: usize, max: usize },
}

const MAX_USER_ID_LENGTH: usize = 64;
const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Validate a user ID (generated UUIDs and seeded names like `admin`)
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.len() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::IdTooLong(MAX_USER_ID_LENGTH));
    }

    match id.chars().find(|c| !is_name_char(*c)) {
        Some(c) => Err(UserValidationError::InvalidIdCharacter(c)),
        None => Ok(()),
    }
}

/// Validate a username: 3-50 characters of `[A-Za-z0-9_-]`
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    let len = username.chars().count();

    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&len) {
        return Err(UserValidationError::UsernameLength {
            min: MIN_USERNAME_LENGTH,
            max: MAX_USERNAME_LENGTH,
        });
    }

    match username.chars().find(|c| !is_name_char(*c)) {
        Some(c) => Err(UserValidationError::InvalidUsernameCharacter(c)),
        None => Ok(()),
    }
}

/// Validate a password: 8-128 characters
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let len = password.chars().count();

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
        return Err(UserValidationError::PasswordLength {
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_ids() {
        assert!(validate_user_id("admin").is_ok());
        assert!(validate_user_id("0b6c1f9e-3c1d-4f55-9d55-4a3c0f1b2e77").is_ok());
        assert!(validate_user_id("user_1").is_ok());
    }

    #[test]
    fn test_invalid_user_ids() {
        assert_eq!(validate_user_id(""), Err(UserValidationError::EmptyId));
        assert_eq!(
            validate_user_id(&"a".repeat(65)),
            Err(UserValidationError::IdTooLong(64))
        );
        assert_eq!(
            validate_user_id("a b"),
            Err(UserValidationError::InvalidIdCharacter(' '))
        );
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob_the-builder").is_ok());
        assert!(matches!(
            validate_username("ab"),
            Err(UserValidationError::UsernameLength { .. })
        ));
        assert!(matches!(
            validate_username(&"a".repeat(51)),
            Err(UserValidationError::UsernameLength { .. })
        ));
        assert_eq!(
            validate_username("al@ce"),
            Err(UserValidationError::InvalidUsernameCharacter('@'))
        );
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }
}
