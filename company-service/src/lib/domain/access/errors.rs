use thiserror::Error;

use crate::domain::access::models::Role;

/// Error for role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),

    #[error("Role set must not be empty")]
    Empty,
}

/// Access decision failures.
///
/// `Unauthenticated` and `Forbidden` are distinct outcomes and are never merged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    #[error("Access denied: {operation} requires role {required}")]
    Forbidden {
        operation: &'static str,
        required: Role,
    },
}

/// Token issuance and validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to issue token: {0}")]
    IssueFailed(String),

    #[error("Invalid token: {0}")]
    Invalid(String),
}
