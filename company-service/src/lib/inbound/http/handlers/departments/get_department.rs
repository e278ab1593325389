use axum::extract::Path;
use axum::extract::State;
use axum::Extension;

use super::DepartmentData;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::domain::department::models::DepartmentId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_department(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(department_id): Path<String>,
) -> Result<ApiSuccess<DepartmentData>, ApiError> {
    authorize(&identity, Operation::GetDepartment)?;
    let department_id = DepartmentId::from_string(&department_id)?;

    state
        .department_service
        .get_department(&department_id)
        .await
        .map_err(ApiError::from)
        .map(|ref department| ApiSuccess::ok(department.into()))
}
