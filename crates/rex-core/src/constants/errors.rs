// ABOUTME: Client-facing error message constants
// ABOUTME: Fixed strings returned instead of leaking provider failure text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Returned with 503 when the recipe provider fails
pub const MSG_UPSTREAM_UNAVAILABLE: &str =
    "External API service unavailable. Please try again later.";

/// Returned with 500 for unclassified failures
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";

/// Prefix of the not-found message; the recipe id follows
pub const MSG_RECIPE_NOT_FOUND_PREFIX: &str = "Recipe not found with id: ";

/// Marker searched for in transport failure text when no status code is available
pub const NOT_FOUND_MARKER: &str = "404";

/// Plain-text body of the recipe API health endpoint
pub const MSG_RECIPE_API_RUNNING: &str = "Recipe API is running";
