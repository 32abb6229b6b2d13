//! Warden API server binary.
//!
//! Loads configuration, connects to PostgreSQL, runs migrations, and serves
//! the admin API.

use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use warden_core::auth::jwt::resolve_jwt_secret;
use warden_core::cache::MemoryCache;
use warden_core::metrics::RequestMetrics;
use warden_core::users::PgUserStore;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "warden_api_server", about = "Warden admin API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3200")]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/warden"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,warden_api=debug,warden_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, bind_addr = %args.bind_addr, "starting warden_api_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    // Run database migrations.
    info!("running database migrations");
    warden_api::migrate(&pool).await?;

    let config = warden_api::config::ApiConfig {
        bind_addr: args.bind_addr,
        database_url: args.database_url,
        auth_service_url: std::env::var("AUTH_SERVICE_URL").ok(),
        internal_secret: std::env::var("INTERNAL_SECRET").ok(),
        jwt_secret: resolve_jwt_secret(),
    };

    let state = warden_api::AppState {
        users: Arc::new(PgUserStore::new(pool)),
        metrics: Arc::new(RequestMetrics::new()),
        cache: Arc::new(MemoryCache::new()),
        config: config.clone(),
    };

    let app = warden_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "admin API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
