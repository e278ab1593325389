use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::identity::models::Credentials;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Exchange credentials for a bearer token.
///
/// Unknown usernames and wrong passwords get the same plain-text 401.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload?;

    let identity = state
        .identity_service
        .authenticate(Credentials {
            username: body.username,
            password: body.password,
        })
        .await?;

    let jwt = state.token_codec.issue(&identity)?;

    Ok(ApiSuccess::ok(LoginResponseData { jwt }))
}

#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub jwt: String,
}
