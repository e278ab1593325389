use async_trait::async_trait;

use crate::domain::employee::models::EmployeeId;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectDraft;
use crate::domain::project::models::ProjectId;

/// Port for project operations, including the project-employee association.
#[async_trait]
pub trait ProjectServicePort: Send + Sync + 'static {
    /// List all projects ordered by name.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError>;

    /// # Errors
    /// * `NotFound` - Project does not exist
    async fn get_project(&self, id: &ProjectId) -> Result<Project, ProjectError>;

    /// Create a project with no members.
    ///
    /// # Errors
    /// * `Conflict` - Name is already taken
    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, ProjectError>;

    /// Replace all scalar fields; membership is untouched.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `Conflict` - New name is held by another project
    async fn update_project(
        &self,
        id: &ProjectId,
        draft: ProjectDraft,
    ) -> Result<Project, ProjectError>;

    /// Delete the project together with all of its assignments.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    async fn delete_project(&self, id: &ProjectId) -> Result<(), ProjectError>;

    /// Make `employee_id` a member of `project_id`. Idempotent.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `EmployeeNotFound` - Employee does not exist
    async fn assign_employee(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<Project, ProjectError>;

    /// Remove `employee_id` from `project_id`; removing a non-member changes nothing.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `EmployeeNotFound` - Employee does not exist
    async fn unassign_employee(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<Project, ProjectError>;

    /// Projects listing `employee_id` as a member.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - Employee does not exist
    async fn list_employee_projects(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Project>, ProjectError>;
}

/// Persistence operations for project aggregate and the assignment relation.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    /// Persist a new project; its member set is not written.
    ///
    /// # Errors
    /// * `Conflict` - Name violates the unique constraint
    async fn create(&self, project: Project) -> Result<Project, ProjectError>;

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, ProjectError>;

    async fn list_all(&self) -> Result<Vec<Project>, ProjectError>;

    async fn find_by_member(&self, employee_id: &EmployeeId) -> Result<Vec<Project>, ProjectError>;

    /// Write scalar fields of an existing project.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `Conflict` - Name violates the unique constraint
    async fn update(&self, project: Project) -> Result<Project, ProjectError>;

    /// Remove the project and its assignment rows in one transaction.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    async fn delete(&self, id: &ProjectId) -> Result<(), ProjectError>;

    /// Insert an assignment edge; an existing edge is left as is.
    ///
    /// # Errors
    /// * `NotFound` / `EmployeeNotFound` - An endpoint vanished concurrently
    async fn add_member(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<(), ProjectError>;

    /// Delete an assignment edge if present.
    async fn remove_member(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<(), ProjectError>;
}
