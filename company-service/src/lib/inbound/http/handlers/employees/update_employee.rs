use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::EmployeeData;
use super::EmployeeRequestBody;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::employee::models::EmployeeId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_employee(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(employee_id): Path<String>,
    payload: Result<Json<EmployeeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    authorize(&identity, Operation::UpdateEmployee)?;
    let employee_id = EmployeeId::from_string(&employee_id)?;
    let Json(body) = payload?;

    state
        .employee_service
        .update_employee(&employee_id, body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::ok(employee.into()))
}
