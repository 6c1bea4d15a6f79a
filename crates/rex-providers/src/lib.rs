// ABOUTME: Recipe provider implementations and core abstractions
// ABOUTME: Provider trait, query building, shared HTTP client, and the Spoonacular adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe provider implementations and core abstractions.
//!
//! Adapters perform exactly one outbound call per operation and report either
//! a typed payload or a [`ProviderError`]. Nothing here retries, caches, or
//! decides what the caller sees on failure.

// Re-export rex-core modules so adapters can keep `use crate::errors::*` etc.
pub use rex_core::constants;
pub use rex_core::errors;
pub use rex_core::models;

/// Core provider trait
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Provider query string construction
pub mod query;
/// Spoonacular API adapter
pub mod spoonacular;

pub use core::RecipeProvider;
pub use http_client::{initialize_shared_client, shared_client};
pub use query::{autocomplete_query, detail_path, search_query};
pub use rex_core::errors::provider::{ProviderError, ProviderResult};
pub use spoonacular::{SpoonacularConfig, SpoonacularProvider};
