// ABOUTME: HTTP server assembly: router, middleware layers, and graceful shutdown
// ABOUTME: Wires configuration into the provider, service, and axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::any::Any;
use std::future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::response::{IntoResponse, Response};
use axum::Router;
use rex_providers::{
    initialize_shared_client, RecipeProvider, SpoonacularConfig, SpoonacularProvider,
};
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{CorsConfig, ServerConfig};
use crate::errors::AppError;
use crate::middleware::{propagate_request_id_layer, set_request_id_layer, setup_cors};
use crate::recipes::RecipeService;
use crate::routes::{HealthRoutes, RecipeRoutes};

/// Build the full application router over the given service
///
/// Layers run outermost first: request id, tracing, CORS, panic recovery.
pub fn build_router(service: Arc<RecipeService>, cors: &CorsConfig) -> Router {
    let provider = service.provider_name();

    Router::new()
        .merge(RecipeRoutes::routes(service))
        .merge(HealthRoutes::routes(provider))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(setup_cors(cors))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
}

/// Answer a panicked request with the 500 envelope instead of dropping it
#[allow(clippy::needless_pass_by_value)] // signature fixed by CatchPanicLayer::custom
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    AppError::internal(format!("Request handler panicked: {detail}")).into_response()
}

/// Build the Spoonacular-backed recipe service from configuration
#[must_use]
pub fn recipe_service_from_config(config: &ServerConfig) -> Arc<RecipeService> {
    initialize_shared_client(
        config.http_client.timeout_secs,
        config.http_client.connect_timeout_secs,
    );

    let provider: Arc<dyn RecipeProvider> = Arc::new(SpoonacularProvider::new(SpoonacularConfig {
        base_url: config.spoonacular.base_url.clone(),
        api_key: config.spoonacular.api_key.clone(),
    }));

    Arc::new(RecipeService::new(provider))
}

/// Bind and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address is invalid, binding fails, or the server stops abnormally
pub async fn run(config: &ServerConfig) -> Result<()> {
    let service = recipe_service_from_config(config);
    let app = build_router(service, &config.cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.http_port))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Recipe API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
