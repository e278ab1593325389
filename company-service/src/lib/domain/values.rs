//! Value objects shared by several aggregates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Error for identifier parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid UUID format: {0}")]
pub struct IdError(pub String);

/// Parse a UUID string into a typed identifier.
pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, IdError> {
    Uuid::parse_str(s).map_err(|e| IdError(e.to_string()))
}

/// Error for free-text field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("must not be blank")]
    Blank,

    #[error("must be at most {max} characters")]
    TooLong { max: usize, actual: usize },
}

/// Trim a mandatory text value and check it against a maximum length.
///
/// # Errors
/// * `Blank` - Value is absent or only whitespace
/// * `TooLong` - Value exceeds `max` characters
pub fn required_text(value: Option<String>, max: usize) -> Result<String, TextError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(TextError::Blank);
    }
    check_length(value, max)
}

/// Trim an optional text value; blank input is treated as absent.
///
/// # Errors
/// * `TooLong` - Value exceeds `max` characters
pub fn optional_text(value: Option<String>, max: usize) -> Result<Option<String>, TextError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => check_length(v, max).map(Some),
        _ => Ok(None),
    }
}

fn check_length(value: String, max: usize) -> Result<String, TextError> {
    let actual = value.chars().count();
    if actual > max {
        Err(TextError::TooLong { max, actual })
    } else {
        Ok(value)
    }
}

/// First or last name of a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MAX_LENGTH: usize = 50;

    /// Create a validated person name (non-blank, at most 50 characters).
    pub fn new(name: Option<String>) -> Result<Self, TextError> {
        required_text(name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("must not be blank")]
    Blank,

    #[error("must be a well-formed email address")]
    InvalidFormat(String),

    #[error("must be at most {max} characters")]
    TooLong { max: usize, actual: usize },
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Blank` - Email is absent or empty
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    /// * `TooLong` - Email exceeds 100 characters
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(EmailError::Blank);
        }

        let actual = email.chars().count();
        if actual > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
