use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDraft;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::uniqueness::ensure_unique;
use crate::domain::uniqueness::value_changed;
use crate::domain::uniqueness::UniqueField;

/// Domain service implementation for employee operations.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }

    async fn ensure_email_available(
        &self,
        email: &str,
        excluding: Option<EmployeeId>,
    ) -> Result<(), EmployeeError> {
        let holder = self
            .repository
            .find_by_email(email)
            .await?
            .map(|employee| employee.id);
        ensure_unique(UniqueField::EmployeeEmail, email, holder, excluding)?;
        Ok(())
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list_all().await
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(*id))
    }

    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeError> {
        self.ensure_email_available(draft.email.as_str(), None)
            .await?;

        let employee = Employee {
            id: EmployeeId::new(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone_number: draft.phone_number,
            hire_date: draft.hire_date,
            job_title: draft.job_title,
            salary: draft.salary,
            project_ids: BTreeSet::new(),
        };

        let created = self.repository.create(employee).await?;
        tracing::info!(employee_id = %created.id, "Employee created");

        Ok(created)
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Employee, EmployeeError> {
        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(*id))?;

        if value_changed(employee.email.as_str(), draft.email.as_str()) {
            self.ensure_email_available(draft.email.as_str(), Some(employee.id))
                .await?;
        }

        employee.first_name = draft.first_name;
        employee.last_name = draft.last_name;
        employee.email = draft.email;
        employee.phone_number = draft.phone_number;
        employee.hire_date = draft.hire_date;
        employee.job_title = draft.job_title;
        employee.salary = draft.salary;

        let updated = self.repository.update(employee).await?;
        tracing::info!(employee_id = %updated.id, "Employee updated");

        Ok(updated)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        self.repository.delete(id).await?;
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(())
    }
}
