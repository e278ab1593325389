use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::employee::errors::SalaryError;
use crate::domain::project::models::ProjectId;
use crate::domain::values::parse_uuid;
use crate::domain::values::EmailAddress;
use crate::domain::values::IdError;
use crate::domain::values::PersonName;

/// Employee aggregate entity.
///
/// `project_ids` is a read-only view of the projects listing this employee as
/// a member; it is loaded from the assignment relation and never written
/// through the employee.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone_number: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub job_title: Option<String>,
    pub salary: Option<Salary>,
    pub project_ids: BTreeSet<ProjectId>,
}

/// Employee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `IdError` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdError> {
        parse_uuid(s).map(Self)
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-negative salary amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Salary(f64);

impl Salary {
    /// # Errors
    /// * `Negative` - Amount below zero
    /// * `NotFinite` - NaN or infinite amount
    pub fn new(amount: f64) -> Result<Self, SalaryError> {
        if !amount.is_finite() {
            Err(SalaryError::NotFinite)
        } else if amount < 0.0 {
            Err(SalaryError::Negative(amount))
        } else {
            Ok(Self(amount))
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

/// Validated field values for creating or fully replacing an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone_number: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub job_title: Option<String>,
    pub salary: Option<Salary>,
}
