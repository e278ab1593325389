use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentDraft;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::models::DepartmentSort;
use crate::domain::department::ports::DepartmentRepository;
use crate::domain::department::ports::DepartmentServicePort;
use crate::domain::paging::Page;
use crate::domain::paging::PageRequest;
use crate::domain::uniqueness::ensure_unique;
use crate::domain::uniqueness::value_changed;
use crate::domain::uniqueness::UniqueField;

/// Domain service implementation for department operations.
pub struct DepartmentService<DR>
where
    DR: DepartmentRepository,
{
    repository: Arc<DR>,
}

impl<DR> DepartmentService<DR>
where
    DR: DepartmentRepository,
{
    pub fn new(repository: Arc<DR>) -> Self {
        Self { repository }
    }

    async fn ensure_name_available(
        &self,
        name: &str,
        excluding: Option<DepartmentId>,
    ) -> Result<(), DepartmentError> {
        let holder = self
            .repository
            .find_by_name(name)
            .await?
            .map(|department| department.id);
        ensure_unique(UniqueField::DepartmentName, name, holder, excluding)?;
        Ok(())
    }
}

#[async_trait]
impl<DR> DepartmentServicePort for DepartmentService<DR>
where
    DR: DepartmentRepository,
{
    async fn list_departments(
        &self,
        request: PageRequest,
        sort: DepartmentSort,
    ) -> Result<Page<Department>, DepartmentError> {
        self.repository.list(request, sort).await
    }

    async fn get_department(&self, id: &DepartmentId) -> Result<Department, DepartmentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DepartmentError::NotFound(*id))
    }

    async fn create_department(&self, draft: DepartmentDraft) -> Result<Department, DepartmentError> {
        self.ensure_name_available(draft.name.as_str(), None).await?;

        let department = Department {
            id: DepartmentId::new(),
            name: draft.name,
            location: draft.location,
        };

        let created = self.repository.create(department).await?;
        tracing::info!(department_id = %created.id, name = %created.name, "Department created");

        Ok(created)
    }

    async fn update_department(
        &self,
        id: &DepartmentId,
        draft: DepartmentDraft,
    ) -> Result<Department, DepartmentError> {
        let mut department = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DepartmentError::NotFound(*id))?;

        if value_changed(department.name.as_str(), draft.name.as_str()) {
            self.ensure_name_available(draft.name.as_str(), Some(department.id))
                .await?;
        }

        department.name = draft.name;
        department.location = draft.location;

        let updated = self.repository.update(department).await?;
        tracing::info!(department_id = %updated.id, "Department updated");

        Ok(updated)
    }

    async fn delete_department(&self, id: &DepartmentId) -> Result<(), DepartmentError> {
        self.repository.delete(id).await?;
        tracing::info!(department_id = %id, "Department deleted");
        Ok(())
    }
}
