use axum::extract::Path;
use axum::extract::State;
use axum::Extension;

use super::ProjectData;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::project::models::ProjectId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_project(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(project_id): Path<String>,
) -> Result<ApiSuccess<ProjectData>, ApiError> {
    authorize(&identity, Operation::GetProject)?;
    let project_id = ProjectId::from_string(&project_id)?;

    state
        .project_service
        .get_project(&project_id)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::ok(project.into()))
}
