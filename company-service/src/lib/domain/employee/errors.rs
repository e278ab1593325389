use thiserror::Error;

use crate::domain::employee::models::EmployeeId;
use crate::domain::uniqueness::UniquenessConflict;

/// Error for salary validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SalaryError {
    #[error("must be greater than or equal to 0")]
    Negative(f64),

    #[error("must be a finite number")]
    NotFinite,
}

/// Top-level error for employee operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("Employee not found with id: {0}")]
    NotFound(EmployeeId),

    #[error("{0}")]
    Conflict(#[from] UniquenessConflict),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
