use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::DepartmentData;
use super::DepartmentRequestBody;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_department(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    payload: Result<Json<DepartmentRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    authorize(&identity, Operation::CreateDepartment)?;
    let Json(body) = payload?;

    state
        .department_service
        .create_department(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::new(StatusCode::CREATED, department.into()))
}
