// ABOUTME: Route module organization for the Rex recipe server HTTP endpoints
// ABOUTME: Recipe API routes plus service health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Rex recipe server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and system status routes
pub mod health;
/// Recipe search, detail, and autocomplete routes
pub mod recipes;

/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
