//! Guard for fields that no two live entities of one kind may share.
//!
//! Services check before writing; the store's UNIQUE constraints close the
//! window between check and write and are reported as the same conflict.

use std::fmt;

use thiserror::Error;

/// A field whose value must be unique among entities of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    DepartmentName,
    ProjectName,
    EmployeeEmail,
    Username,
    UserEmail,
}

impl UniqueField {
    fn entity(self) -> &'static str {
        match self {
            UniqueField::DepartmentName => "Department",
            UniqueField::ProjectName => "Project",
            UniqueField::EmployeeEmail => "Employee",
            UniqueField::Username | UniqueField::UserEmail => "User",
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            UniqueField::DepartmentName | UniqueField::ProjectName => "name",
            UniqueField::EmployeeEmail | UniqueField::UserEmail => "email",
            UniqueField::Username => "username",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity(), self.attribute())
    }
}

/// Another entity already holds the value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{} with {} '{value}' already exists", .field.entity(), .field.attribute())]
pub struct UniquenessConflict {
    pub field: UniqueField,
    pub value: String,
}

impl UniquenessConflict {
    pub fn new(field: UniqueField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Check that `value` is free, given the entity currently holding it.
///
/// # Arguments
/// * `field` - Field being checked
/// * `value` - Candidate value
/// * `holder` - Id of the entity that currently holds the value, if any
/// * `excluding` - Id of the entity being updated, which may keep its own value
///
/// # Errors
/// * `UniquenessConflict` - A different entity holds the value
pub fn ensure_unique<Id: PartialEq>(
    field: UniqueField,
    value: &str,
    holder: Option<Id>,
    excluding: Option<Id>,
) -> Result<(), UniquenessConflict> {
    match (holder, excluding) {
        (None, _) => Ok(()),
        (Some(holder), Some(excluding)) if holder == excluding => Ok(()),
        (Some(_), _) => Err(UniquenessConflict::new(field, value)),
    }
}

/// Whether an update changes a unique value and so needs a fresh check.
pub fn value_changed(current: &str, candidate: &str) -> bool {
    current != candidate
}
