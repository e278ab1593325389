use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::employee::models::EmployeeId;
use crate::domain::project::errors::ScheduleError;
use crate::domain::values::parse_uuid;
use crate::domain::values::required_text;
use crate::domain::values::IdError;
use crate::domain::values::TextError;

/// Project aggregate entity.
///
/// Owns the authoritative member set of the project-employee association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub description: Option<String>,
    pub schedule: Schedule,
    pub members: BTreeSet<EmployeeId>,
}

impl Project {
    /// Add `employee` to the member set.
    ///
    /// # Returns
    /// `true` if the employee was not yet a member
    pub fn add_member(&mut self, employee: EmployeeId) -> bool {
        self.members.insert(employee)
    }

    /// Remove `employee` from the member set.
    ///
    /// # Returns
    /// `true` if the employee was a member
    pub fn remove_member(&mut self, employee: &EmployeeId) -> bool {
        self.members.remove(employee)
    }

    pub fn has_member(&self, employee: &EmployeeId) -> bool {
        self.members.contains(employee)
    }
}

/// Project unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `IdError` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        parse_uuid(s).map(Self)
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Project name: non-blank, at most 100 characters, unique among projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: Option<String>) -> Result<Self, TextError> {
        required_text(name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Optional start and end dates; the end never precedes the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schedule {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Schedule {
    /// # Errors
    /// * `EndBeforeStart` - Both dates present and end is before start
    pub fn new(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ScheduleError> {
        match (start_date, end_date) {
            (Some(start), Some(end)) if end < start => Err(ScheduleError::EndBeforeStart),
            _ => Ok(Self {
                start_date,
                end_date,
            }),
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

/// Validated field values for creating or fully replacing a project.
///
/// Membership is not part of a draft; it changes only through assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: ProjectName,
    pub description: Option<String>,
    pub schedule: Schedule,
}
