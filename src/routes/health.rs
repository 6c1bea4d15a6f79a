// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! Readiness reports the configured provider but never calls it; the server
//! holds no connections that could be unready.

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::constants::endpoints::{HEALTH_CHECK, READY_CHECK};
use crate::constants::service_names::REX_RECIPE_SERVER;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(provider: &'static str) -> Router {
        Router::new()
            .route(HEALTH_CHECK, get(Self::health_handler))
            .route(
                READY_CHECK,
                get(move || async move {
                    Json(json!({
                        "status": "ready",
                        "provider": provider,
                        "timestamp": Utc::now().to_rfc3339()
                    }))
                }),
            )
    }

    async fn health_handler() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": REX_RECIPE_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
