use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::violated_unique_constraint;
use crate::domain::department::errors::DepartmentError;
use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentId;
use crate::domain::department::models::DepartmentName;
use crate::domain::department::models::DepartmentSort;
use crate::domain::department::ports::DepartmentRepository;
use crate::domain::paging::Page;
use crate::domain::paging::PageRequest;
use crate::domain::uniqueness::UniqueField;
use crate::domain::uniqueness::UniquenessConflict;

pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn write_error(e: sqlx::Error, department: &Department) -> DepartmentError {
    match violated_unique_constraint(&e) {
        Some("departments_name_key") => UniquenessConflict::new(
            UniqueField::DepartmentName,
            department.name.as_str(),
        )
        .into(),
        _ => DepartmentError::DatabaseError(e.to_string()),
    }
}

fn read_error(e: sqlx::Error) -> DepartmentError {
    DepartmentError::DatabaseError(e.to_string())
}

fn department_from_row(row: &PgRow) -> Result<Department, DepartmentError> {
    let name: String = row.try_get("name").map_err(read_error)?;

    Ok(Department {
        id: DepartmentId(row.try_get("id").map_err(read_error)?),
        name: DepartmentName::new(Some(name))
            .map_err(|e| DepartmentError::DatabaseError(format!("Stored name is invalid: {}", e)))?,
        location: row.try_get("location").map_err(read_error)?,
    })
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn create(&self, department: Department) -> Result<Department, DepartmentError> {
        sqlx::query(
            r#"
            INSERT INTO departments (id, name, location)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(department.id.0)
        .bind(department.name.as_str())
        .bind(department.location.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &department))?;

        Ok(department)
    }

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DepartmentError> {
        sqlx::query(
            r#"
            SELECT id, name, location
            FROM departments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?
        .as_ref()
        .map(department_from_row)
        .transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DepartmentError> {
        sqlx::query(
            r#"
            SELECT id, name, location
            FROM departments
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?
        .as_ref()
        .map(department_from_row)
        .transpose()
    }

    async fn list(
        &self,
        request: PageRequest,
        sort: DepartmentSort,
    ) -> Result<Page<Department>, DepartmentError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await
            .map_err(read_error)?;

        // Column and direction come from closed enums, never from request text.
        let statement = format!(
            r#"
            SELECT id, name, location
            FROM departments
            ORDER BY {} {} NULLS LAST, id
            LIMIT $1 OFFSET $2
            "#,
            sort.field.column(),
            sort.direction.as_sql(),
        );

        let rows = sqlx::query(&statement)
            .bind(i64::from(request.size()))
            .bind(request.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?;

        let items = rows
            .iter()
            .map(department_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, request, total.max(0) as u64))
    }

    async fn update(&self, department: Department) -> Result<Department, DepartmentError> {
        let result = sqlx::query(
            r#"
            UPDATE departments
            SET name = $2, location = $3
            WHERE id = $1
            "#,
        )
        .bind(department.id.0)
        .bind(department.name.as_str())
        .bind(department.location.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &department))?;

        if result.rows_affected() == 0 {
            return Err(DepartmentError::NotFound(department.id));
        }

        Ok(department)
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), DepartmentError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(DepartmentError::NotFound(*id));
        }

        Ok(())
    }
}
