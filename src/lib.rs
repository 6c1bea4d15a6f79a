// ABOUTME: Main library entry point for the Rex recipe proxy server
// ABOUTME: Exposes a simplified recipe-search API backed by a third-party recipe provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rex Recipe Server
//!
//! A proxy that exposes recipe search, detail, and autocomplete endpoints
//! while delegating data retrieval to Spoonacular.
//!
//! ## Architecture
//!
//! - **Providers** (`rex-providers`): query building and the provider adapter
//! - **Recipes**: service orchestration, failure classification, nutrition adjustment
//! - **Routes**: thin axum handlers over the recipe service
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rex_recipe_server::config::environment::ServerConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! rex_recipe_server::server::run(&config).await?;
//! # Ok(())
//! # }
//! ```

// Re-export rex-core modules so the rest of the crate can use `crate::errors::*` etc.
pub use rex_core::constants;
pub use rex_core::errors;
pub use rex_core::models;

/// Environment-based configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// HTTP middleware (CORS, request id)
pub mod middleware;

/// Recipe service, error classification, and nutrition adjustment
pub mod recipes;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
