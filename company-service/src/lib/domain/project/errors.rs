use thiserror::Error;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::EmployeeId;
use crate::domain::project::models::ProjectId;
use crate::domain::uniqueness::UniquenessConflict;

/// Error for project schedule validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("must not be before startDate")]
    EndBeforeStart,
}

/// Top-level error for project operations
#[derive(Debug, Clone, Error)]
pub enum ProjectError {
    #[error("Project not found with id: {0}")]
    NotFound(ProjectId),

    #[error("Employee not found with id: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("{0}")]
    Conflict(#[from] UniquenessConflict),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<EmployeeError> for ProjectError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(id) => ProjectError::EmployeeNotFound(id),
            EmployeeError::Conflict(conflict) => ProjectError::Conflict(conflict),
            EmployeeError::DatabaseError(message) => ProjectError::DatabaseError(message),
            EmployeeError::Unknown(message) => ProjectError::Unknown(message),
        }
    }
}
