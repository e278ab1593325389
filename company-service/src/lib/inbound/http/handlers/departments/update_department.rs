use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::DepartmentData;
use super::DepartmentRequestBody;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::department::models::DepartmentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_department(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(department_id): Path<String>,
    payload: Result<Json<DepartmentRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    authorize(&identity, Operation::UpdateDepartment)?;
    let department_id = DepartmentId::from_string(&department_id)?;
    let Json(body) = payload?;

    state
        .department_service
        .update_department(&department_id, body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::ok(department.into()))
}
