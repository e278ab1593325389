//! Role-based access decisions.
//!
//! Every protected operation has one row in [`Operation::required_role`];
//! handlers call [`authorize`] with the caller's identity before doing any work.

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListDepartments,
    GetDepartment,
    CreateDepartment,
    UpdateDepartment,
    DeleteDepartment,
    ListEmployees,
    GetEmployee,
    GetEmployeeProjects,
    CreateEmployee,
    UpdateEmployee,
    DeleteEmployee,
    ListProjects,
    GetProject,
    CreateProject,
    UpdateProject,
    DeleteProject,
    AssignEmployee,
    UnassignEmployee,
}

impl Operation {
    /// Role an identity must hold; `None` admits any authenticated identity.
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Operation::ListDepartments
            | Operation::GetDepartment
            | Operation::ListEmployees
            | Operation::GetEmployee
            | Operation::GetEmployeeProjects
            | Operation::ListProjects
            | Operation::GetProject => None,

            Operation::CreateDepartment
            | Operation::UpdateDepartment
            | Operation::DeleteDepartment
            | Operation::CreateEmployee
            | Operation::UpdateEmployee
            | Operation::DeleteEmployee
            | Operation::CreateProject
            | Operation::UpdateProject
            | Operation::DeleteProject
            | Operation::AssignEmployee
            | Operation::UnassignEmployee => Some(Role::Admin),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::ListDepartments => "list departments",
            Operation::GetDepartment => "get department",
            Operation::CreateDepartment => "create department",
            Operation::UpdateDepartment => "update department",
            Operation::DeleteDepartment => "delete department",
            Operation::ListEmployees => "list employees",
            Operation::GetEmployee => "get employee",
            Operation::GetEmployeeProjects => "get employee projects",
            Operation::CreateEmployee => "create employee",
            Operation::UpdateEmployee => "update employee",
            Operation::DeleteEmployee => "delete employee",
            Operation::ListProjects => "list projects",
            Operation::GetProject => "get project",
            Operation::CreateProject => "create project",
            Operation::UpdateProject => "update project",
            Operation::DeleteProject => "delete project",
            Operation::AssignEmployee => "assign employee to project",
            Operation::UnassignEmployee => "remove employee from project",
        }
    }
}

/// Decide whether `identity` may perform `operation`.
///
/// # Errors
/// * `Forbidden` - The identity lacks the operation's required role
pub fn authorize(identity: &AuthenticatedIdentity, operation: Operation) -> Result<(), AccessError> {
    match operation.required_role() {
        Some(required) if !identity.roles.contains(required) => {
            tracing::warn!(
                username = %identity.username,
                operation = operation.name(),
                required = %required,
                "Access denied"
            );
            Err(AccessError::Forbidden {
                operation: operation.name(),
                required,
            })
        }
        _ => Ok(()),
    }
}
