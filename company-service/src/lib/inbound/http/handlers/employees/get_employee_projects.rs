use axum::extract::Path;
use axum::extract::State;
use axum::Extension;

use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::employee::models::EmployeeId;
use crate::inbound::http::handlers::projects::ProjectData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Projects the employee is assigned to.
pub async fn get_employee_projects(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<Vec<ProjectData>>, ApiError> {
    authorize(&identity, Operation::GetEmployeeProjects)?;
    let employee_id = EmployeeId::from_string(&employee_id)?;

    state
        .project_service
        .list_employee_projects(&employee_id)
        .await
        .map_err(ApiError::from)
        .map(|projects| ApiSuccess::ok(projects.iter().map(ProjectData::from).collect()))
}
