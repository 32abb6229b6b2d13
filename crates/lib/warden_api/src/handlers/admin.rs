//! Admin request handlers.

use axum::Json;
use axum::extract::State;
use warden_core::users::ADMIN_ROLE;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{HealthResponse, MessageResponse};

/// `GET /admin/health` — liveness probe for the admin surface.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `GET /admin/metrics` — current metrics snapshot, passed through verbatim.
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let snapshot = state.metrics.snapshot().await?;
    Ok(Json(snapshot))
}

/// `POST /admin/clear_cache` — drop every cached entry.
pub async fn clear_cache_handler(
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    state.cache.clear().await?;
    Ok(Json(MessageResponse {
        message: "Cache cleared successfully".to_string(),
    }))
}

/// `GET /admin/check` — does the authenticated user hold the admin role?
pub async fn check_admin_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = user
        .0
        .sub
        .ok_or_else(|| AppError::Validation("User ID not found in token".to_string()))?;

    let record = state
        .users
        .find_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if record.user_role != ADMIN_ROLE {
        return Err(AppError::Forbidden(format!(
            "user {user_id} has role {}",
            record.user_role
        )));
    }

    Ok(Json(MessageResponse {
        message: "User is an admin".to_string(),
    }))
}
