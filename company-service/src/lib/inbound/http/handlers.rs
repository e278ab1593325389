use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::access::errors::AccessError;
use crate::domain::access::errors::TokenError;
use crate::domain::department::errors::DepartmentError;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::identity::errors::IdentityError;
use crate::domain::project::errors::ProjectError;
use crate::domain::validation::ValidationErrors;
use crate::domain::values::IdError;

pub mod authentication;
pub mod departments;
pub mod employees;
pub mod projects;

/// Body returned for failed logins, as plain text.
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect username or password";

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Validation(ValidationErrors),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    LoginFailed,
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::LoginFailed => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    LOGIN_FAILED_MESSAGE,
                )
                    .into_response();
            }
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorData::new(INTERNAL_ERROR_MESSAGE),
                )
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiErrorData {
                    message: errors.to_string(),
                    errors: Some(errors.errors().clone()),
                },
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiErrorData::new(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorData::new(msg)),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ApiErrorData::new(msg)),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ApiErrorData::new(msg)),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiErrorData::new(msg)),
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiErrorData {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<IdError> for ApiError {
    fn from(err: IdError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthenticated(_) => ApiError::Unauthorized(err.to_string()),
            AccessError::Forbidden { .. } => ApiError::Forbidden(err.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(_) => ApiError::Unauthorized(err.to_string()),
            TokenError::IssueFailed(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Conflict(_) => ApiError::Conflict(err.to_string()),
            IdentityError::InvalidCredentials => ApiError::LoginFailed,
            IdentityError::Password(_) | IdentityError::DatabaseError(_) | IdentityError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

// Duplicates on managed entities are reported as 400, unlike registration.
impl From<DepartmentError> for ApiError {
    fn from(err: DepartmentError) -> Self {
        match err {
            DepartmentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DepartmentError::Conflict(_) => ApiError::BadRequest(err.to_string()),
            DepartmentError::DatabaseError(_) | DepartmentError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::Conflict(_) => ApiError::BadRequest(err.to_string()),
            EmployeeError::DatabaseError(_) | EmployeeError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProjectError> for ApiError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(_) | ProjectError::EmployeeNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ProjectError::Conflict(_) => ApiError::BadRequest(err.to_string()),
            ProjectError::DatabaseError(_) | ProjectError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}
