use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::EmployeeData;
use super::EmployeeRequestBody;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    payload: Result<Json<EmployeeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    authorize(&identity, Operation::CreateEmployee)?;
    let Json(body) = payload?;

    state
        .employee_service
        .create_employee(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}
