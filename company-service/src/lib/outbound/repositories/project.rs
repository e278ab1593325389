use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::violated_foreign_key;
use super::violated_unique_constraint;
use crate::domain::employee::models::EmployeeId;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::models::ProjectName;
use crate::domain::project::models::Schedule;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::uniqueness::UniqueField;
use crate::domain::uniqueness::UniquenessConflict;

/// Project columns plus the ids of its member employees.
const SELECT_PROJECT: &str = r#"
    SELECT p.id, p.name, p.description, p.start_date, p.end_date,
           COALESCE(
               array_agg(pe.employee_id) FILTER (WHERE pe.employee_id IS NOT NULL),
               '{}'
           ) AS employee_ids
    FROM projects p
    LEFT JOIN project_employee pe ON pe.project_id = p.id
"#;

pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn write_error(e: sqlx::Error, project: &Project) -> ProjectError {
    match violated_unique_constraint(&e) {
        Some("projects_name_key") => {
            UniquenessConflict::new(UniqueField::ProjectName, project.name.as_str()).into()
        }
        _ => ProjectError::DatabaseError(e.to_string()),
    }
}

fn read_error(e: sqlx::Error) -> ProjectError {
    ProjectError::DatabaseError(e.to_string())
}

fn project_from_row(row: &PgRow) -> Result<Project, ProjectError> {
    let name: String = row.try_get("name").map_err(read_error)?;
    let employee_ids: Vec<Uuid> = row.try_get("employee_ids").map_err(read_error)?;
    let schedule = Schedule::new(
        row.try_get("start_date").map_err(read_error)?,
        row.try_get("end_date").map_err(read_error)?,
    )
    .map_err(|e| ProjectError::DatabaseError(format!("Stored schedule is invalid: {}", e)))?;

    Ok(Project {
        id: ProjectId(row.try_get("id").map_err(read_error)?),
        name: ProjectName::new(Some(name))
            .map_err(|e| ProjectError::DatabaseError(format!("Stored name is invalid: {}", e)))?,
        description: row.try_get("description").map_err(read_error)?,
        schedule,
        members: employee_ids.into_iter().map(EmployeeId).collect(),
    })
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn create(&self, project: Project) -> Result<Project, ProjectError> {
        sqlx::query(
            r#"
            INSERT INTO projects (id, name, description, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(project.id.0)
        .bind(project.name.as_str())
        .bind(project.description.as_deref())
        .bind(project.schedule.start_date())
        .bind(project.schedule.end_date())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &project))?;

        Ok(project)
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError> {
        let statement = format!("{} WHERE p.id = $1 GROUP BY p.id", SELECT_PROJECT);

        sqlx::query(&statement)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?
            .as_ref()
            .map(project_from_row)
            .transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, ProjectError> {
        let statement = format!("{} WHERE p.name = $1 GROUP BY p.id", SELECT_PROJECT);

        sqlx::query(&statement)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?
            .as_ref()
            .map(project_from_row)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Project>, ProjectError> {
        let statement = format!("{} GROUP BY p.id ORDER BY p.name", SELECT_PROJECT);

        sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?
            .iter()
            .map(project_from_row)
            .collect()
    }

    async fn find_by_member(&self, employee_id: &EmployeeId) -> Result<Vec<Project>, ProjectError> {
        let statement = format!(
            r#"{}
            WHERE p.id IN (SELECT project_id FROM project_employee WHERE employee_id = $1)
            GROUP BY p.id
            ORDER BY p.name"#,
            SELECT_PROJECT
        );

        sqlx::query(&statement)
            .bind(employee_id.0)
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?
            .iter()
            .map(project_from_row)
            .collect()
    }

    async fn update(&self, project: Project) -> Result<Project, ProjectError> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = $2, description = $3, start_date = $4, end_date = $5
            WHERE id = $1
            "#,
        )
        .bind(project.id.0)
        .bind(project.name.as_str())
        .bind(project.description.as_deref())
        .bind(project.schedule.start_date())
        .bind(project.schedule.end_date())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &project))?;

        if result.rows_affected() == 0 {
            return Err(ProjectError::NotFound(project.id));
        }

        Ok(project)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), ProjectError> {
        let mut tx = self.pool.begin().await.map_err(read_error)?;

        let released = sqlx::query("DELETE FROM project_employee WHERE project_id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(read_error)?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(ProjectError::NotFound(*id));
        }

        tx.commit().await.map_err(read_error)?;
        tracing::debug!(project_id = %id, assignments = released.rows_affected(), "Project assignments removed");

        Ok(())
    }

    async fn add_member(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<(), ProjectError> {
        sqlx::query(
            r#"
            INSERT INTO project_employee (project_id, employee_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(project_id.0)
        .bind(employee_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e) {
            Some("project_employee_project_id_fkey") => ProjectError::NotFound(*project_id),
            Some("project_employee_employee_id_fkey") => {
                ProjectError::EmployeeNotFound(*employee_id)
            }
            _ => ProjectError::DatabaseError(e.to_string()),
        })?;

        Ok(())
    }

    async fn remove_member(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<(), ProjectError> {
        sqlx::query("DELETE FROM project_employee WHERE project_id = $1 AND employee_id = $2")
            .bind(project_id.0)
            .bind(employee_id.0)
            .execute(&self.pool)
            .await
            .map_err(read_error)?;

        Ok(())
    }
}
