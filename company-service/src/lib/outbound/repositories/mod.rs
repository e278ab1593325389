pub mod department;
pub mod employee;
pub mod project;
pub mod user;

/// Name of the UNIQUE constraint a failed statement violated, if any.
fn violated_unique_constraint(err: &sqlx::Error) -> Option<&str> {
    err.as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint())
}

/// Name of the foreign key constraint a failed statement violated, if any.
fn violated_foreign_key(err: &sqlx::Error) -> Option<&str> {
    err.as_database_error()
        .filter(|db_err| db_err.is_foreign_key_violation())
        .and_then(|db_err| db_err.constraint())
}
