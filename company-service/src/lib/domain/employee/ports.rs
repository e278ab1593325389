use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDraft;
use crate::domain::employee::models::EmployeeId;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// List all employees ordered by last and first name.
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// # Errors
    /// * `Conflict` - Email is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeError>;

    /// Replace all scalar fields; project membership is untouched.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `Conflict` - New email is held by another employee
    /// * `DatabaseError` - Database operation failed
    async fn update_employee(
        &self,
        id: &EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Employee, EmployeeError>;

    /// Delete the employee together with its project assignments.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}

/// Persistence operations for employee aggregate.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// # Errors
    /// * `Conflict` - Email violates the unique constraint
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError>;

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Write scalar fields of an existing employee.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `Conflict` - Email violates the unique constraint
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// Remove the employee and its assignment rows in one transaction.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}
