// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Provider endpoints, search defaults, and client-facing error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Client-facing error messages
pub mod errors;

pub use errors::*;

/// Spoonacular API endpoints and parameter names
pub mod spoonacular {
    /// Provider name used in logs and errors
    pub const PROVIDER_NAME: &str = "spoonacular";
    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-api-key";
    /// Complex search endpoint
    pub const COMPLEX_SEARCH_PATH: &str = "/recipes/complexSearch";
    /// Autocomplete endpoint
    pub const AUTOCOMPLETE_PATH: &str = "/recipes/autocomplete";
}

/// Search and autocomplete defaults
pub mod search {
    /// Page size used when the caller omits one or supplies an out-of-range value
    pub const DEFAULT_PAGE_SIZE: i64 = 12;
    /// Smallest accepted page size
    pub const MIN_PAGE_SIZE: i64 = 1;
    /// Largest accepted page size
    pub const MAX_PAGE_SIZE: i64 = 100;
    /// Default pagination offset
    pub const DEFAULT_OFFSET: i64 = 0;
    /// Default number of autocomplete suggestions
    pub const DEFAULT_AUTOCOMPLETE_LIMIT: u32 = 5;
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Recipe API base path
    pub const RECIPES_BASE: &str = "/api/recipes";
}

/// Service identity
pub mod service_names {
    /// Server binary / tracing service name
    pub const REX_RECIPE_SERVER: &str = "rex-recipe-server";
}
