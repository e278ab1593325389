use axum::extract::Path;
use axum::extract::State;
use axum::Extension;

use super::ProjectData;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::employee::models::EmployeeId;
use crate::domain::project::models::ProjectId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn unassign_employee(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path((project_id, employee_id)): Path<(String, String)>,
) -> Result<ApiSuccess<ProjectData>, ApiError> {
    authorize(&identity, Operation::UnassignEmployee)?;
    let project_id = ProjectId::from_string(&project_id)?;
    let employee_id = EmployeeId::from_string(&employee_id)?;

    state
        .project_service
        .unassign_employee(&project_id, &employee_id)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::ok(project.into()))
}
