use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::access::errors::AccessError;
use crate::domain::access::token::TokenCodec;
use crate::inbound::http::handlers::ApiError;

/// Middleware that validates the bearer token and stores the caller's
/// `AuthenticatedIdentity` in the request extensions.
pub async fn authenticate(
    State(token_codec): State<Arc<TokenCodec>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let identity = token_codec.validate(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        AccessError::Unauthenticated("Invalid or expired token".to_string())
    })?;

    tracing::debug!(username = %identity.username, "Request authenticated");
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, AccessError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AccessError::Unauthenticated("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AccessError::Unauthenticated("Invalid Authorization header".to_string()))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AccessError::Unauthenticated(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            )
        })
}
