//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use catalog_common::{AppConfig, AppError};
use catalog_db::{close_pool, create_pool, run_migrations, PgToolRepository, PgVoteRepository};
use catalog_service::{ReadmeFetcher, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::middleware::{apply_middleware, apply_middleware_with_config, apply_rate_limit};
use crate::routes::{catalog_routes, create_router, health_routes};
use crate::state::AppState;

/// Build the application with all routes and the basic middleware stack
///
/// No rate limiting and no CORS; used by tests and embedders.
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the production application from the configuration held in `state`
///
/// Catalog routes are rate limited per client IP; health routes are not.
pub fn create_app_with_config(state: AppState) -> Router {
    let config = state.config();

    let catalog = apply_rate_limit(catalog_routes(), &config.rate_limit);
    let router = Router::new().nest("/api", catalog.merge(health_routes()));
    let router =
        apply_middleware_with_config(router, &config.cors, config.app.env.is_production());

    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = catalog_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    // README enrichment
    let readme_fetcher = ReadmeFetcher::new(&config.readme).map_err(AppError::from)?;
    info!(enabled = readme_fetcher.is_enabled(), "README enrichment configured");

    // Create repositories
    let tool_repo = Arc::new(PgToolRepository::new(pool.clone()));
    let vote_repo = Arc::new(PgVoteRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .tool_repo(tool_repo)
        .vote_repo(vote_repo)
        .readme_fetcher(readme_fetcher)
        .page_size(config.database.page_size)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Resolve once Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Run the HTTP server until the shutdown signal resolves
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("HTTP server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {}: {}", config.api.address(), e)))?;

    // Create app state
    let state = create_app_state(config).await?;
    let pool = state.service_context().pool().clone();

    // Build application
    let app = create_app_with_config(state);

    // Run server, then release database connections
    let result = run_server(app, addr).await;
    close_pool(&pool).await;
    result
}
