use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::domain::paging::SortDirection;
use crate::domain::values::parse_uuid;
use crate::domain::values::required_text;
use crate::domain::values::IdError;
use crate::domain::values::TextError;

/// Department aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: DepartmentName,
    pub location: Option<String>,
}

/// Department unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartmentId(pub Uuid);

impl DepartmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `IdError` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        parse_uuid(s).map(Self)
    }
}

impl Default for DepartmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Department name: non-blank, at most 100 characters, unique among departments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentName(String);

impl DepartmentName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: Option<String>) -> Result<Self, TextError> {
        required_text(name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated field values for creating or fully replacing a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentDraft {
    pub name: DepartmentName,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepartmentSortField {
    Id,
    #[default]
    Name,
    Location,
}

impl DepartmentSortField {
    pub fn column(&self) -> &'static str {
        match self {
            DepartmentSortField::Id => "id",
            DepartmentSortField::Name => "name",
            DepartmentSortField::Location => "location",
        }
    }
}

impl FromStr for DepartmentSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(DepartmentSortField::Id),
            "name" => Ok(DepartmentSortField::Name),
            "location" => Ok(DepartmentSortField::Location),
            _ => Err("must be one of: id, name, location".to_string()),
        }
    }
}

/// Ordering of a department listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentSort {
    pub field: DepartmentSortField,
    pub direction: SortDirection,
}
