use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ProjectData;
use super::ProjectRequestBody;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_project(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    payload: Result<Json<ProjectRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ProjectData>, ApiError> {
    authorize(&identity, Operation::CreateProject)?;
    let Json(body) = payload?;

    state
        .project_service
        .create_project(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::new(StatusCode::CREATED, project.into()))
}
