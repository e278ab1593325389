use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authentication::login::login;
use super::handlers::authentication::register::register;
use super::handlers::departments::create_department::create_department;
use super::handlers::departments::delete_department::delete_department;
use super::handlers::departments::get_department::get_department;
use super::handlers::departments::list_departments::list_departments;
use super::handlers::departments::update_department::update_department;
use super::handlers::employees::create_employee::create_employee;
use super::handlers::employees::delete_employee::delete_employee;
use super::handlers::employees::get_employee::get_employee;
use super::handlers::employees::get_employee_projects::get_employee_projects;
use super::handlers::employees::list_employees::list_employees;
use super::handlers::employees::update_employee::update_employee;
use super::handlers::projects::assign_employee::assign_employee;
use super::handlers::projects::create_project::create_project;
use super::handlers::projects::delete_project::delete_project;
use super::handlers::projects::get_project::get_project;
use super::handlers::projects::list_projects::list_projects;
use super::handlers::projects::unassign_employee::unassign_employee;
use super::handlers::projects::update_project::update_project;
use super::handlers::ApiError;
use super::middleware::authenticate as auth_middleware;
use crate::domain::access::token::TokenCodec;
use crate::domain::department::ports::DepartmentServicePort;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::project::ports::ProjectServicePort;

#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<dyn IdentityServicePort>,
    pub department_service: Arc<dyn DepartmentServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub project_service: Arc<dyn ProjectServicePort>,
    pub token_codec: Arc<TokenCodec>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register));

    let protected_routes = Router::new()
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/api/departments/:department_id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/:employee_id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route(
            "/api/employees/:employee_id/projects",
            get(get_employee_projects),
        )
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/:project_id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/api/projects/:project_id/employees/:employee_id",
            post(assign_employee).delete(unassign_employee),
        )
        .route_layer(middleware::from_fn_with_state(
            state.token_codec.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<_>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
