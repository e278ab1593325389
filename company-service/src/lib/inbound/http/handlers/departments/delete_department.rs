use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::department::models::DepartmentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_department(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(department_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    authorize(&identity, Operation::DeleteDepartment)?;
    let department_id = DepartmentId::from_string(&department_id)?;

    state
        .department_service
        .delete_department(&department_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
