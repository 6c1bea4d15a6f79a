// ABOUTME: Recipe domain layer between the HTTP routes and the provider adapter
// ABOUTME: Service orchestration, failure classification, and nutrition adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes
//!
//! Control flow for every operation is: build the provider request, make one
//! provider call, then either classify the failure or shape the payload, and
//! finally apply ingredient exclusions when the caller asked for them.

/// Maps provider failures to client-facing error kinds
pub mod classifier;
/// Proportional nutrient reduction for excluded ingredients
pub mod nutrition;
/// Recipe operations exposed to the HTTP layer
pub mod service;

pub use nutrition::{apply_exclusions, round2};
pub use service::RecipeService;
