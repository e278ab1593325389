use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::identity::models::Password;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::User;
use crate::domain::identity::models::Username;
use crate::domain::validation::ValidationErrors;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(body) = payload?;

    state
        .identity_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registering an identity (raw JSON)
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestBody {
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = match self.username {
            Some(username) => errors.check("username", Username::new(username)),
            None => {
                errors.add("username", "must not be blank");
                None
            }
        };
        let password = match self.password {
            Some(password) => errors.check("password", Password::new(password)),
            None => {
                errors.add("password", "must not be blank");
                None
            }
        };
        let email = errors.check("email", EmailAddress::new(self.email.unwrap_or_default()));
        let first_name = errors.check("firstName", PersonName::new(self.first_name));
        let last_name = errors.check("lastName", PersonName::new(self.last_name));

        match (username, password, email, first_name, last_name) {
            (Some(username), Some(password), Some(email), Some(first_name), Some(last_name)) => {
                Ok(RegisterUserCommand {
                    username,
                    email,
                    password,
                    first_name,
                    last_name,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Public view of an identity; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.as_str().to_string(),
            last_name: user.last_name.as_str().to_string(),
            roles: user.roles.to_strings(),
        }
    }
}
