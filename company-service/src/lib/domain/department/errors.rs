use thiserror::Error;

use crate::domain::department::models::DepartmentId;
use crate::domain::uniqueness::UniquenessConflict;

/// Top-level error for department operations
#[derive(Debug, Clone, Error)]
pub enum DepartmentError {
    #[error("Department not found with id: {0}")]
    NotFound(DepartmentId),

    #[error("{0}")]
    Conflict(#[from] UniquenessConflict),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
