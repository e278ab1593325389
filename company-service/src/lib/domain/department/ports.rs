use async_trait::async_trait;

use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentDraft;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::models::DepartmentSort;
use crate::domain::paging::Page;
use crate::domain::paging::PageRequest;

/// Port for department domain service operations.
#[async_trait]
pub trait DepartmentServicePort: Send + Sync + 'static {
    /// List one page of departments.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_departments(
        &self,
        request: PageRequest,
        sort: DepartmentSort,
    ) -> Result<Page<Department>, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_department(&self, id: &DepartmentId) -> Result<Department, DepartmentError>;

    /// # Errors
    /// * `Conflict` - Name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_department(&self, draft: DepartmentDraft) -> Result<Department, DepartmentError>;

    /// Replace all fields of an existing department.
    ///
    /// # Errors
    /// * `NotFound` - Department does not exist
    /// * `Conflict` - New name is held by another department
    /// * `DatabaseError` - Database operation failed
    async fn update_department(
        &self,
        id: &DepartmentId,
        draft: DepartmentDraft,
    ) -> Result<Department, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_department(&self, id: &DepartmentId) -> Result<(), DepartmentError>;
}

/// Persistence operations for department aggregate.
#[async_trait]
pub trait DepartmentRepository: Send + Sync + 'static {
    /// # Errors
    /// * `Conflict` - Name violates the unique constraint
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, department: Department) -> Result<Department, DepartmentError>;

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DepartmentError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DepartmentError>;

    async fn list(
        &self,
        request: PageRequest,
        sort: DepartmentSort,
    ) -> Result<Page<Department>, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    /// * `Conflict` - Name violates the unique constraint
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, department: Department) -> Result<Department, DepartmentError>;

    /// # Errors
    /// * `NotFound` - Department does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &DepartmentId) -> Result<(), DepartmentError>;
}
