// ABOUTME: HTTP server assembly and lifecycle for the Prenatal Fit API
// ABOUTME: Merges route groups, applies tracing and CORS layers, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use crate::errors::{AppError, AppResult};
use crate::middleware::{setup_cors, with_request_tracing};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, ProfileRoutes, SafetyRoutes, VitalsRoutes};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Build the full application router with its middleware stack
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let router = Router::new()
        .merge(HealthRoutes::routes())
        .merge(VitalsRoutes::routes(Arc::clone(resources)))
        .merge(SafetyRoutes::routes(Arc::clone(resources)))
        .merge(ProfileRoutes::routes(Arc::clone(resources)));

    with_request_tracing(router).layer(setup_cors(&resources.config))
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = SocketAddr::new(resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        AppError::internal(format!("Failed to bind HTTP listener on {addr}: {e}")).with_source(e)
    })?;

    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, build_router(&resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")).with_source(e))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
