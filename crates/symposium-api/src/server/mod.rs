//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use symposium_common::{AppConfig, AppError, JwtService};
use symposium_core::SnowflakeGenerator;
use symposium_db::{
    create_pool, run_migrations, PgConferenceRepository, PgPool, PgPreferenceRepository,
    PgSubmissionRepository, PgTalkRepository, PgUserRepository,
};
use symposium_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit_and_cors};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes skip rate limiting and CORS.
///
/// # Errors
/// Returns `AppError::Config` if the rate limit settings are invalid
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = apply_rate_limit_and_cors(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    let router = apply_middleware(router.merge(health_routes()));
    Ok(router.with_state(state))
}

/// Wire the PostgreSQL repositories and shared services into a context
pub fn build_service_context(pool: PgPool, config: &AppConfig) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .conference_repo(Arc::new(PgConferenceRepository::new(pool.clone())))
        .preference_repo(Arc::new(PgPreferenceRepository::new(pool.clone())))
        .talk_repo(Arc::new(PgTalkRepository::new(pool.clone())))
        .submission_repo(Arc::new(PgSubmissionRepository::new(pool.clone())))
        .pool(pool)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Connect to PostgreSQL, apply migrations and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = symposium_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    let service_context = build_service_context(pool, &config)?;
    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
