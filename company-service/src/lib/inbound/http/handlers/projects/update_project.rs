use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ProjectData;
use super::ProjectRequestBody;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::project::models::ProjectId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_project(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(project_id): Path<String>,
    payload: Result<Json<ProjectRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ProjectData>, ApiError> {
    authorize(&identity, Operation::UpdateProject)?;
    let project_id = ProjectId::from_string(&project_id)?;
    let Json(body) = payload?;

    state
        .project_service
        .update_project(&project_id, body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::ok(project.into()))
}
