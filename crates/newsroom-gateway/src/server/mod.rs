//! Gateway server setup
//!
//! Router, middleware, dependency wiring, and the serve loop. Startup
//! failures (config, pool, schema, seed) are the only fatal errors;
//! everything after binding is reported per-request.

mod handler;
mod state;

pub use handler::gateway_handler;
pub use state::GatewayState;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use newsroom_common::{AppConfig, AppError};
use newsroom_core::CategoryRepository;

use crate::connection::ConnectionManager;

/// Categories seeded at every startup; existing rows keep their ids
pub const DEFAULT_CATEGORIES: &[&str] =
    &["General", "Technology", "Science", "Sports", "Entertainment"];

/// Create the gateway router
pub fn create_router() -> Router<GatewayState> {
    Router::new()
        .route("/ws", get(gateway_handler))
        .route("/health", get(health_check))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Build the complete application
pub fn create_app(state: GatewayState) -> Router {
    create_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Initialize all dependencies and create `GatewayState`
pub async fn create_gateway_state(config: &AppConfig) -> Result<GatewayState, AppError> {
    tracing::info!("Connecting to PostgreSQL...");
    let db_config = newsroom_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = newsroom_db::create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    tracing::info!("PostgreSQL connection established");

    newsroom_db::ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let articles = Arc::new(newsroom_db::PgArticleRepository::new(pool.clone()));
    let categories = Arc::new(newsroom_db::PgCategoryRepository::new(pool.clone()));
    let comments = Arc::new(newsroom_db::PgCommentRepository::new(pool.clone()));
    let reactions = Arc::new(newsroom_db::PgReactionRepository::new(pool));

    categories.ensure_defaults(DEFAULT_CATEGORIES).await?;
    tracing::info!(count = DEFAULT_CATEGORIES.len(), "Default categories ensured");

    let connection_manager = ConnectionManager::new_shared();

    Ok(GatewayState::new(
        articles,
        categories,
        comments,
        reactions,
        connection_manager,
    ))
}

/// Run the gateway server on the given address
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!("Gateway listening on ws://{addr}/ws");

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete gateway server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let state = create_gateway_state(&config).await?;
    let app = create_app(state);
    run_server(app, &config.server.address()).await
}
