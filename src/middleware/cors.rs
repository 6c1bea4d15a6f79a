// ABOUTME: CORS middleware configuration for the recipe API
// ABOUTME: Wildcard origins for development, explicit origin list with credentials otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// How long browsers may cache a preflight answer
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Configure CORS for the recipe API
///
/// `*` (or an empty setting) allows any origin without credentials. A
/// comma-separated list allows exactly those origins and enables credentials.
///
/// # Examples
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins (production)
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(PREFLIGHT_MAX_AGE);

    let origins = parse_origins(&config.allowed_origins);
    if origins.is_empty() {
        // Wildcard headers are incompatible with credentials, so they only go here
        return base
            .allow_origin(AllowOrigin::any())
            .allow_headers(AllowHeaders::any());
    }

    base.allow_origin(AllowOrigin::list(origins))
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Parse the configured origin list; empty means "any origin"
fn parse_origins(allowed_origins: &str) -> Vec<HeaderValue> {
    let trimmed = allowed_origins.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return Vec::new();
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "*")
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect()
}
