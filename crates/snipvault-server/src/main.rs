//! # Snipvault Server
//!
//! Main entry point: loads configuration, connects MySQL and the cache, and
//! serves the REST API until SIGINT or SIGTERM.

use metrics_exporter_prometheus::PrometheusHandle;
use snipvault_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use snipvault_core::{VaultError, VaultResult};
use snipvault_repository::DatabasePool;
use snipvault_rest::{create_router, AppState};
use snipvault_security::TokenProvider;
use snipvault_server::{
    di::{build_monolithic_module, ServiceResolver},
    observability, startup,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            observability::init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    observability::init_logging(&config.observability);
    let metrics = observability::init_metrics(&config.observability);

    startup::print_banner();
    info!("Starting Snipvault Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config, metrics).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig, metrics: Option<PrometheusHandle>) -> VaultResult<()> {
    let connected = DatabasePool::connect(&config.database).await?;
    let module = build_monolithic_module(&connected, &config.redis, &config.cache)?;
    let db_pool = module.database_pool();

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let token_provider = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));
    let app_state = AppState::new(module.snippet_service());
    let mut router = create_router(app_state, token_provider, &config.server);

    let metrics_path = metrics.as_ref().map(|_| config.observability.metrics_path.as_str());
    if let Some(handle) = metrics.clone() {
        router = router.merge(observability::metrics_router(
            &config.observability.metrics_path,
            handle,
        ));
    }

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| VaultError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    let cache_backend = if config.redis.enabled { "redis" } else { "in-memory" };
    startup::print_startup_info(&addr, cache_backend, metrics_path);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| VaultError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
