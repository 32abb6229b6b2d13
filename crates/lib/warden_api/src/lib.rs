//! # warden_api
//!
//! HTTP API library for Warden.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use warden_core::cache::CacheBackend;
use warden_core::metrics::MetricsProvider;
use warden_core::users::UserStore;

use crate::config::ApiConfig;
use crate::handlers::admin;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User store backing the admin role check.
    pub users: Arc<dyn UserStore>,
    /// Metrics provider backing `/admin/metrics`.
    pub metrics: Arc<dyn MetricsProvider>,
    /// Cache backend cleared by `/admin/clear_cache`.
    pub cache: Arc<dyn CacheBackend>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `warden_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    warden_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Admin routes (require auth)
    let admin = Router::new()
        .route("/admin/health", get(admin::health_handler))
        .route("/admin/metrics", get(admin::metrics_handler))
        .route("/admin/clear_cache", post(admin::clear_cache_handler))
        .route("/admin/check", get(admin::check_admin_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(admin)
        .layer(cors)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::metrics::track_requests,
        ))
        .with_state(state)
}
