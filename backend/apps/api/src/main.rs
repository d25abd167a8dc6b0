//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level failures end up as
//! `kernel::outcome::Outcome` redirects inside the domain crates.

mod config;

use std::sync::Arc;

use admin::PgAdminRepository;
use admin::domain::AdminSessionRepository;
use admin::presentation::{AdminGateState, protect};
use admin::router::LOGIN_PATH;
use axum::{Router, response::Redirect, routing::get};
use inventory::PgProductRepository;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,admin=info,inventory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let admin_repo = Arc::new(PgAdminRepository::new(pool.clone()));
    let product_repo = Arc::new(PgProductRepository::new(pool));

    // Startup cleanup: remove expired admin sessions
    // Errors here should not prevent server startup
    if let Err(e) = admin_repo.cleanup_expired_sessions().await {
        tracing::warn!(
            error = %e,
            "Admin session cleanup failed, continuing anyway"
        );
    }

    let admin_config = Arc::new(config.admin);
    let gate = AdminGateState::new(admin_repo.clone(), admin_config.clone());

    // Build router
    let app = Router::new()
        .route("/", get(|| async { Redirect::to(LOGIN_PATH) }))
        .merge(admin::admin_router(admin_repo, admin_config))
        .merge(protect(
            inventory::inventory_router(product_repo, Arc::new(config.inventory)),
            gate,
        ))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
