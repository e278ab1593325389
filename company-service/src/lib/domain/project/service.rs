use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectDraft;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::project::ports::ProjectServicePort;
use crate::domain::uniqueness::ensure_unique;
use crate::domain::uniqueness::value_changed;
use crate::domain::uniqueness::UniqueField;

/// Domain service for projects and their employee assignments.
///
/// Membership lives on the project side only; the employee side is a view
/// computed from the same relation, so every edge change goes through here.
pub struct ProjectService<PR, ER>
where
    PR: ProjectRepository,
    ER: EmployeeRepository,
{
    projects: Arc<PR>,
    employees: Arc<ER>,
}

impl<PR, ER> ProjectService<PR, ER>
where
    PR: ProjectRepository,
    ER: EmployeeRepository,
{
    pub fn new(projects: Arc<PR>, employees: Arc<ER>) -> Self {
        Self {
            projects,
            employees,
        }
    }

    async fn load_project(&self, id: &ProjectId) -> Result<Project, ProjectError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(*id))
    }

    async fn ensure_employee_exists(&self, id: &EmployeeId) -> Result<(), ProjectError> {
        match self.employees.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ProjectError::EmployeeNotFound(*id)),
        }
    }

    async fn ensure_name_available(
        &self,
        name: &str,
        excluding: Option<ProjectId>,
    ) -> Result<(), ProjectError> {
        let holder = self
            .projects
            .find_by_name(name)
            .await?
            .map(|project| project.id);
        ensure_unique(UniqueField::ProjectName, name, holder, excluding)?;
        Ok(())
    }
}

#[async_trait]
impl<PR, ER> ProjectServicePort for ProjectService<PR, ER>
where
    PR: ProjectRepository,
    ER: EmployeeRepository,
{
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError> {
        self.projects.list_all().await
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Project, ProjectError> {
        self.load_project(id).await
    }

    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, ProjectError> {
        self.ensure_name_available(draft.name.as_str(), None).await?;

        let project = Project {
            id: ProjectId::new(),
            name: draft.name,
            description: draft.description,
            schedule: draft.schedule,
            members: BTreeSet::new(),
        };

        let created = self.projects.create(project).await?;
        tracing::info!(project_id = %created.id, name = %created.name, "Project created");

        Ok(created)
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        draft: ProjectDraft,
    ) -> Result<Project, ProjectError> {
        let mut project = self.load_project(id).await?;

        if value_changed(project.name.as_str(), draft.name.as_str()) {
            self.ensure_name_available(draft.name.as_str(), Some(project.id))
                .await?;
        }

        project.name = draft.name;
        project.description = draft.description;
        project.schedule = draft.schedule;

        let updated = self.projects.update(project).await?;
        tracing::info!(project_id = %updated.id, "Project updated");

        Ok(updated)
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<(), ProjectError> {
        let project = self.load_project(id).await?;

        self.projects.delete(id).await?;
        tracing::info!(
            project_id = %id,
            released_members = project.members.len(),
            "Project deleted"
        );

        Ok(())
    }

    async fn assign_employee(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<Project, ProjectError> {
        let mut project = self.load_project(project_id).await?;
        self.ensure_employee_exists(employee_id).await?;

        if project.add_member(*employee_id) {
            self.projects.add_member(project_id, employee_id).await?;
            tracing::info!(project_id = %project_id, employee_id = %employee_id, "Employee assigned to project");
        } else {
            tracing::debug!(project_id = %project_id, employee_id = %employee_id, "Employee already assigned");
        }

        Ok(project)
    }

    async fn unassign_employee(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<Project, ProjectError> {
        let mut project = self.load_project(project_id).await?;
        self.ensure_employee_exists(employee_id).await?;

        if project.remove_member(employee_id) {
            self.projects.remove_member(project_id, employee_id).await?;
            tracing::info!(project_id = %project_id, employee_id = %employee_id, "Employee removed from project");
        } else {
            tracing::debug!(project_id = %project_id, employee_id = %employee_id, "Employee was not assigned");
        }

        Ok(project)
    }

    async fn list_employee_projects(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Project>, ProjectError> {
        self.ensure_employee_exists(employee_id).await?;
        self.projects.find_by_member(employee_id).await
    }
}
