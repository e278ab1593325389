use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::violated_unique_constraint;
use crate::domain::access::models::RoleSet;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::UserRepository;
use crate::domain::uniqueness::UniqueField;
use crate::domain::uniqueness::UniquenessConflict;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, IdentityError> {
        let statement = format!(
            r#"
            SELECT id, username, email, password_hash, first_name, last_name, roles, created_at
            FROM users
            WHERE {} = $1
            "#,
            column
        );

        sqlx::query(&statement)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| IdentityError::DatabaseError(e.to_string()))?
            .as_ref()
            .map(user_from_row)
            .transpose()
    }
}

fn corrupt(field: &str, e: impl std::fmt::Display) -> IdentityError {
    IdentityError::DatabaseError(format!("Stored {} is invalid: {}", field, e))
}

fn user_from_row(row: &PgRow) -> Result<User, IdentityError> {
    let read = |e: sqlx::Error| IdentityError::DatabaseError(e.to_string());

    let username: String = row.try_get("username").map_err(read)?;
    let email: String = row.try_get("email").map_err(read)?;
    let first_name: String = row.try_get("first_name").map_err(read)?;
    let last_name: String = row.try_get("last_name").map_err(read)?;
    let roles: Vec<String> = row.try_get("roles").map_err(read)?;

    Ok(User {
        id: UserId(row.try_get("id").map_err(read)?),
        username: Username::new(username).map_err(|e| corrupt("username", e))?,
        email: EmailAddress::new(email).map_err(|e| corrupt("email", e))?,
        password_hash: row.try_get("password_hash").map_err(read)?,
        first_name: PersonName::new(Some(first_name)).map_err(|e| corrupt("first name", e))?,
        last_name: PersonName::new(Some(last_name)).map_err(|e| corrupt("last name", e))?,
        roles: RoleSet::parse(&roles).map_err(|e| corrupt("roles", e))?,
        created_at: row.try_get("created_at").map_err(read)?,
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, IdentityError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, username, email, password_hash, first_name, last_name, roles, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.roles.to_strings())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match violated_unique_constraint(&e) {
            Some("users_username_key") => {
                UniquenessConflict::new(UniqueField::Username, user.username.as_str()).into()
            }
            Some("users_email_key") => {
                UniquenessConflict::new(UniqueField::UserEmail, user.email.as_str()).into()
            }
            _ => IdentityError::DatabaseError(e.to_string()),
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, IdentityError> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityError> {
        self.find_one("email", email).await
    }
}
