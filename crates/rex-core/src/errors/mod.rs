// ABOUTME: Unified error handling with standard error codes and the client error envelope
// ABOUTME: Defines AppError, ErrorCode, ErrorResponse and the axum IntoResponse integration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure that reaches the HTTP boundary is an [`AppError`] carrying one
//! of a small set of [`ErrorCode`]s. The code decides the status, the reason
//! phrase, and whether the internal message may be shown to the caller.
//!
//! | Kind                  | Code                          | Status |
//! |-----------------------|-------------------------------|--------|
//! | `NotFound`            | `RESOURCE_NOT_FOUND`          | 404    |
//! | `UpstreamUnavailable` | `EXTERNAL_SERVICE_UNAVAILABLE`| 503    |
//! | `InvalidArgument`     | `INVALID_INPUT`, `VALUE_OUT_OF_RANGE` | 400 |
//! | `Unexpected`          | `INTERNAL_ERROR`              | 500    |

/// Transport failures raised by recipe provider adapters
pub mod provider;

use crate::constants::errors::{MSG_UNEXPECTED, MSG_UPSTREAM_UNAVAILABLE};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

#[cfg(feature = "http-response")]
use axum::response::{IntoResponse, Response};
#[cfg(feature = "http-response")]
use http::StatusCode;

pub use provider::{ProviderError, ProviderResult};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// Malformed caller input
    InvalidInput,
    /// Caller input outside its accepted range
    ValueOutOfRange,

    // Resources
    /// The requested recipe does not exist
    ResourceNotFound,

    // External services
    /// The recipe provider failed or could not be reached
    ExternalServiceUnavailable,

    // Internal
    /// Anything not otherwise classified
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceUnavailable => 503,
            Self::InternalError => 500,
        }
    }

    /// Canonical reason phrase for [`Self::http_status`]
    #[must_use]
    pub const fn reason_phrase(self) -> &'static str {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange => "Bad Request",
            Self::ResourceNotFound => "Not Found",
            Self::ExternalServiceUnavailable => "Service Unavailable",
            Self::InternalError => "Internal Server Error",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message (may contain provider detail, see [`Self::public_message`])
    pub message: String,
    /// Resource identifier, when the error concerns a single resource
    pub resource_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Add a resource ID to the error
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Message safe to return to the caller
    ///
    /// Upstream and internal failures are replaced with fixed strings; their
    /// detail only goes to the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self.code {
            ErrorCode::ExternalServiceUnavailable => MSG_UPSTREAM_UNAVAILABLE.to_owned(),
            ErrorCode::InternalError => MSG_UNEXPECTED.to_owned(),
            ErrorCode::InvalidInput | ErrorCode::ValueOutOfRange | ErrorCode::ResourceNotFound => {
                self.message.clone()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found, with the caller-visible message given verbatim
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// External service unavailable
    pub fn upstream_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Error envelope returned to HTTP clients
///
/// `{ "timestamp": ..., "status": 404, "error": "Not Found", "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// RFC 3339 time the error was produced
    pub timestamp: String,
    /// HTTP status code
    pub status: u16,
    /// Reason phrase of the status
    pub error: String,
    /// Caller-safe message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            status: error.http_status(),
            error: error.code.reason_phrase().to_owned(),
            message: error.public_message(),
        }
    }
}

#[cfg(feature = "http-response")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            match &self.source {
                Some(source) => {
                    tracing::error!(code = ?self.code, source = %source, "{}", self.message);
                }
                None => tracing::error!(code = ?self.code, "{}", self.message),
            }
        } else {
            tracing::warn!(code = ?self.code, "{}", self.message);
        }

        (status, axum::Json(ErrorResponse::from(&self))).into_response()
    }
}
