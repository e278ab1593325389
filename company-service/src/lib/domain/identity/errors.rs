use thiserror::Error;

use crate::domain::uniqueness::UniquenessConflict;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("size must be between {min} and {max}")]
    Length { min: usize, max: usize, actual: usize },

    #[error("may only contain letters, digits, '.', '_' and '-'")]
    InvalidCharacters,
}

/// Error for password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("size must be between {min} and {max}")]
    Length { min: usize, max: usize, actual: usize },
}

/// Error for outbound notification delivery
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to deliver notification: {0}")]
    DeliveryFailed(String),
}

/// Top-level error for identity operations
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    #[error("{0}")]
    Conflict(#[from] UniquenessConflict),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
