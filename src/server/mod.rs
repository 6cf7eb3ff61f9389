//! HTTP server layer
//!
//! # Modules
//!
//! - [`routes`]: Router and request handlers for the REST source endpoints

pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::catalog::loader::load_package_list;
use crate::catalog::provider::ProviderDispatch;
use crate::config::ServerConfig;
use crate::manifest::repository::ManifestRepository;
use crate::manifest::service::ManifestService;
use crate::server::routes::create_router;

/// Loads the package list and serves the API until SIGINT or SIGTERM
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let packages = load_package_list(&config.package_list)?;
    let repository = ManifestRepository::new(packages, ProviderDispatch::default());
    let service = Arc::new(ManifestService::new(repository));
    let app = create_router(service, config.request_timeout);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited unexpectedly")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Starting server shutdown");
}
