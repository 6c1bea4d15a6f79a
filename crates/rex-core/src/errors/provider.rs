// ABOUTME: Structured error types for recipe provider operations
// ABOUTME: Carries transport detail (status code, message) for classification at the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure raised while talking to a recipe provider
///
/// Adapters never decide the client-facing outcome; they report what happened
/// and the service layer classifies it.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status returned by the provider
        status_code: u16,
        /// Status line and body excerpt
        message: String,
    },

    /// The request never produced a response (connect, timeout, TLS)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The response body could not be decoded
    #[error("Failed to parse {provider} response: {message}")]
    ParseError {
        /// Provider name
        provider: String,
        /// Decoder message
        message: String,
    },
}

impl ProviderError {
    /// HTTP status reported by the provider, when one was received
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            Self::NetworkError(_) | Self::ParseError { .. } => None,
        }
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries the recipe id, which must not leak into text the
        // classifier scans for a 404 marker
        let err = err.without_url();
        if let Some(status) = err.status() {
            Self::ApiError {
                provider: "unknown".to_owned(),
                status_code: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            Self::ParseError {
                provider: "unknown".to_owned(),
                message: err.to_string(),
            }
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
