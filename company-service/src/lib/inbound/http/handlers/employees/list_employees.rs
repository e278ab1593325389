use axum::extract::State;
use axum::Extension;

use super::EmployeeData;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_employees(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<Vec<EmployeeData>>, ApiError> {
    authorize(&identity, Operation::ListEmployees)?;

    state
        .employee_service
        .list_employees()
        .await
        .map_err(ApiError::from)
        .map(|employees| ApiSuccess::ok(employees.iter().map(EmployeeData::from).collect()))
}
