use axum::extract::State;
use axum::Extension;

use super::ProjectData;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_projects(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<Vec<ProjectData>>, ApiError> {
    authorize(&identity, Operation::ListProjects)?;

    state
        .project_service
        .list_projects()
        .await
        .map_err(ApiError::from)
        .map(|projects| ApiSuccess::ok(projects.iter().map(ProjectData::from).collect()))
}
