use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDraft;
use crate::domain::employee::models::Salary;
use crate::domain::validation::ValidationErrors;
use crate::domain::values::optional_text;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;

pub mod create_employee;
pub mod delete_employee;
pub mod get_employee;
pub mod get_employee_projects;
pub mod list_employees;
pub mod update_employee;

const PHONE_MAX_LENGTH: usize = 20;
const JOB_TITLE_MAX_LENGTH: usize = 100;

/// HTTP request body for creating or replacing an employee (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequestBody {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    hire_date: Option<NaiveDate>,
    job_title: Option<String>,
    salary: Option<f64>,
}

impl EmployeeRequestBody {
    fn try_into_draft(self) -> Result<EmployeeDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = errors.check("firstName", PersonName::new(self.first_name));
        let last_name = errors.check("lastName", PersonName::new(self.last_name));
        let email = errors.check("email", EmailAddress::new(self.email.unwrap_or_default()));
        let phone_number = errors.check(
            "phoneNumber",
            optional_text(self.phone_number, PHONE_MAX_LENGTH),
        );
        let job_title = errors.check(
            "jobTitle",
            optional_text(self.job_title, JOB_TITLE_MAX_LENGTH),
        );
        let salary = errors.check("salary", self.salary.map(Salary::new).transpose());

        match (first_name, last_name, email, phone_number, job_title, salary) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(phone_number),
                Some(job_title),
                Some(salary),
            ) => Ok(EmployeeDraft {
                first_name,
                last_name,
                email,
                phone_number,
                hire_date: self.hire_date,
                job_title,
                salary,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub job_title: Option<String>,
    pub salary: Option<f64>,
    pub project_ids: Vec<String>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            first_name: employee.first_name.as_str().to_string(),
            last_name: employee.last_name.as_str().to_string(),
            email: employee.email.as_str().to_string(),
            phone_number: employee.phone_number.clone(),
            hire_date: employee.hire_date,
            job_title: employee.job_title.clone(),
            salary: employee.salary.map(|salary| salary.amount()),
            project_ids: employee.project_ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDeletedData {
    pub deleted: bool,
}
