use axum::extract::Path;
use axum::extract::State;
use axum::Extension;

use super::EmployeeDeletedData;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::employee::models::EmployeeId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<EmployeeDeletedData>, ApiError> {
    authorize(&identity, Operation::DeleteEmployee)?;
    let employee_id = EmployeeId::from_string(&employee_id)?;

    state
        .employee_service
        .delete_employee(&employee_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(EmployeeDeletedData { deleted: true }))
}
