// ABOUTME: HTTP server assembly for the recipe API
// ABOUTME: Builds the layered axum router and serves it until Ctrl+C or SIGTERM
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Server
//!
//! Every API route is reachable both at the root and under `/api`, the
//! prefix the web front end uses.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use fridge_core::constants::{defaults, routes};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::{info, warn};

use crate::middleware::{propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, IngredientRoutes, RecipeRoutes};

/// Build the complete router with middleware applied
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(IngredientRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(Arc::clone(&resources)));

    Router::new()
        .route("/", get(HealthRoutes::handle_welcome))
        .merge(api.clone())
        .nest(routes::API_PREFIX, api)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer())
                .layer(setup_cors(&resources.config)),
        )
        .layer(DefaultBodyLimit::max(defaults::MAX_REQUEST_BODY_BYTES))
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    serve(listener, resources).await
}

/// Serve on an already-bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let local_addr = listener.local_addr().context("Listener has no local address")?;
    info!(
        address = %local_addr,
        backend = resources.database.backend_info(),
        "Recipe API listening"
    );

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Recipe API stopped");
    Ok(())
}

/// Resolve when Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
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
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
