//! API server configuration.
//!
//! Constructed explicitly at startup and carried in [`crate::AppState`];
//! handlers never read the process environment.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3200").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Base URL of the external authentication service that issues tokens.
    /// Declared at startup; the admin handlers themselves never call it.
    pub auth_service_url: Option<String>,
    /// Shared secret for service-to-service calls. Declared at startup;
    /// the admin handlers themselves never use it.
    pub internal_secret: Option<String>,
    /// JWT signing secret.
    pub jwt_secret: String,
}
