// ABOUTME: Classifies provider transport failures into NotFound or UpstreamUnavailable
// ABOUTME: Prefers the structured status code, falls back to a "404" marker in the message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rex_core::constants::errors::{MSG_RECIPE_NOT_FOUND_PREFIX, NOT_FOUND_MARKER};
use rex_core::errors::{AppError, ProviderError};

/// Error for a recipe id the provider does not know
#[must_use]
pub fn recipe_not_found(id: i64) -> AppError {
    AppError::not_found(format!("{MSG_RECIPE_NOT_FOUND_PREFIX}{id}"))
        .with_resource_id(id.to_string())
}

/// Whether a transport failure means "no such resource"
///
/// A status code, when the adapter captured one, is authoritative. Only
/// failures without one fall back to scanning the message text.
#[must_use]
pub fn indicates_not_found(error: &ProviderError) -> bool {
    error.status_code().map_or_else(
        || error.to_string().contains(NOT_FOUND_MARKER),
        |status| status == 404,
    )
}

/// Classify a failed search; searches never report not-found
#[must_use]
pub fn classify_search_failure(error: ProviderError) -> AppError {
    upstream_unavailable(error)
}

/// Classify a failed detail lookup
#[must_use]
pub fn classify_detail_failure(id: i64, error: ProviderError) -> AppError {
    if indicates_not_found(&error) {
        return recipe_not_found(id).with_source(error);
    }
    upstream_unavailable(error).with_resource_id(id.to_string())
}

fn upstream_unavailable(error: ProviderError) -> AppError {
    let provider = match &error {
        ProviderError::ApiError { provider, .. } | ProviderError::ParseError { provider, .. } => {
            provider.clone()
        }
        ProviderError::NetworkError(_) => "recipe provider".to_owned(),
    };
    AppError::upstream_unavailable(provider, error.to_string()).with_source(error)
}
