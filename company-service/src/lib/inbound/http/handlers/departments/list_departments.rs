use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::Extension;

use super::DepartmentPageData;
use super::ListDepartmentsQuery;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::policy::authorize;
use crate::domain::access::policy::Operation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_departments(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    query: Result<Query<ListDepartmentsQuery>, QueryRejection>,
) -> Result<ApiSuccess<DepartmentPageData>, ApiError> {
    authorize(&identity, Operation::ListDepartments)?;
    let Query(query) = query?;
    let (request, sort) = query.try_into_parts()?;

    state
        .department_service
        .list_departments(request, sort)
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::ok(page.into()))
}
