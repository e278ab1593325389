use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::violated_unique_constraint;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::Salary;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::project::models::ProjectId;
use crate::domain::uniqueness::UniqueField;
use crate::domain::uniqueness::UniquenessConflict;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;

/// Employee columns plus the ids of the projects listing the employee.
const SELECT_EMPLOYEE: &str = r#"
    SELECT e.id, e.first_name, e.last_name, e.email, e.phone_number,
           e.hire_date, e.job_title, e.salary,
           COALESCE(
               array_agg(pe.project_id) FILTER (WHERE pe.project_id IS NOT NULL),
               '{}'
           ) AS project_ids
    FROM employees e
    LEFT JOIN project_employee pe ON pe.employee_id = e.id
"#;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn write_error(e: sqlx::Error, employee: &Employee) -> EmployeeError {
    match violated_unique_constraint(&e) {
        Some("employees_email_key") => {
            UniquenessConflict::new(UniqueField::EmployeeEmail, employee.email.as_str()).into()
        }
        _ => EmployeeError::DatabaseError(e.to_string()),
    }
}

fn read_error(e: sqlx::Error) -> EmployeeError {
    EmployeeError::DatabaseError(e.to_string())
}

fn corrupt(field: &str, e: impl std::fmt::Display) -> EmployeeError {
    EmployeeError::DatabaseError(format!("Stored {} is invalid: {}", field, e))
}

fn employee_from_row(row: &PgRow) -> Result<Employee, EmployeeError> {
    let first_name: String = row.try_get("first_name").map_err(read_error)?;
    let last_name: String = row.try_get("last_name").map_err(read_error)?;
    let email: String = row.try_get("email").map_err(read_error)?;
    let salary: Option<f64> = row.try_get("salary").map_err(read_error)?;
    let project_ids: Vec<Uuid> = row.try_get("project_ids").map_err(read_error)?;

    Ok(Employee {
        id: EmployeeId(row.try_get("id").map_err(read_error)?),
        first_name: PersonName::new(Some(first_name)).map_err(|e| corrupt("first name", e))?,
        last_name: PersonName::new(Some(last_name)).map_err(|e| corrupt("last name", e))?,
        email: EmailAddress::new(email).map_err(|e| corrupt("email", e))?,
        phone_number: row.try_get("phone_number").map_err(read_error)?,
        hire_date: row.try_get("hire_date").map_err(read_error)?,
        job_title: row.try_get("job_title").map_err(read_error)?,
        salary: salary
            .map(Salary::new)
            .transpose()
            .map_err(|e| corrupt("salary", e))?,
        project_ids: project_ids.into_iter().map(ProjectId).collect(),
    })
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        sqlx::query(
            r#"
            INSERT INTO employees
                (id, first_name, last_name, email, phone_number, hire_date, job_title, salary)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.email.as_str())
        .bind(employee.phone_number.as_deref())
        .bind(employee.hire_date)
        .bind(employee.job_title.as_deref())
        .bind(employee.salary.map(|salary| salary.amount()))
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &employee))?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let statement = format!("{} WHERE e.id = $1 GROUP BY e.id", SELECT_EMPLOYEE);

        sqlx::query(&statement)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?
            .as_ref()
            .map(employee_from_row)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
        let statement = format!("{} WHERE e.email = $1 GROUP BY e.id", SELECT_EMPLOYEE);

        sqlx::query(&statement)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?
            .as_ref()
            .map(employee_from_row)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let statement = format!(
            "{} GROUP BY e.id ORDER BY e.last_name, e.first_name, e.id",
            SELECT_EMPLOYEE
        );

        sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)?
            .iter()
            .map(employee_from_row)
            .collect()
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                hire_date = $6, job_title = $7, salary = $8
            WHERE id = $1
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.email.as_str())
        .bind(employee.phone_number.as_deref())
        .bind(employee.hire_date)
        .bind(employee.job_title.as_deref())
        .bind(employee.salary.map(|salary| salary.amount()))
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &employee))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(employee.id));
        }

        Ok(employee)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let mut tx = self.pool.begin().await.map_err(read_error)?;

        sqlx::query("DELETE FROM project_employee WHERE employee_id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(read_error)?;

        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(read_error)?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(*id));
        }

        tx.commit().await.map_err(read_error)?;
        Ok(())
    }
}
