// ABOUTME: Client-facing recipe data models shared by the provider adapter and the HTTP layer
// ABOUTME: Re-exports search, recipe detail, nutrition, and autocomplete DTOs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The same structures describe both the provider's JSON and the JSON this
//! server returns, so field names follow the provider's camelCase keys.
//!
//! ## Design Principles
//!
//! - **Tolerant**: unknown keys are ignored, every field is optional
//! - **Faithful**: absent fields stay absent on the way out, never defaulted
//! - **Transient**: built per request, never persisted or shared

mod autocomplete;
mod nutrition;
mod recipe;
mod search;

pub use autocomplete::AutocompleteSuggestion;
pub use nutrition::{
    CaloricBreakdown, Flavonoid, IngredientNutrition, Nutrient, NutritionInfo, Property,
    WeightPerServing,
};
pub use recipe::{Ingredient, RecipeDetail};
pub use search::{SearchFilters, SearchResponse, SearchResult};
