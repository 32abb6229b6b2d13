//! Authentication middleware — Bearer token extraction and JWT verification.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::error;
use warden_core::auth::AuthError;
use warden_core::auth::jwt::verify_access_token;
use warden_core::models::TokenClaims;

use crate::AppState;
use crate::error::AppError;

/// Key used to store `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the JWT,
/// and injects `AuthenticatedUser` into request extensions.
///
/// Every failure mode (missing header, wrong scheme, malformed, expired, bad
/// signature) produces the same 401 response; the underlying cause goes to
/// the server log only.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims =
        verify_request(&request, state.config.jwt_secret.as_bytes()).map_err(|e| {
            error!(error = %e, "token verification failed");
            AppError::Unauthorized(e.to_string())
        })?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

fn verify_request(request: &Request, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AuthError::TokenError("missing authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::TokenError("invalid authorization scheme".into()))?;

    verify_access_token(token, secret)
}
