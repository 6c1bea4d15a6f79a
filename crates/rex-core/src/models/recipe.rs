// ABOUTME: Full recipe detail model with ingredient list and nutrition block
// ABOUTME: Dietary flags are tri-state: absent means unknown, not false
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::NutritionInfo;
use serde::{Deserialize, Serialize};

/// Complete recipe record as returned by the detail endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Recipe identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Number of servings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<i32>,
    /// Total preparation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<i32>,
    /// HTML summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// HTML instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Original recipe page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Dish types (main course, side dish, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_types: Option<Vec<String>>,
    /// Diets the recipe satisfies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diets: Option<Vec<String>>,
    /// Cuisines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    /// Ingredients in provider order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_ingredients: Option<Vec<Ingredient>>,
    /// Nutrition facts per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionInfo>,

    // Dietary flags
    /// Vegetarian
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
    /// Vegan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegan: Option<bool>,
    /// Gluten free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gluten_free: Option<bool>,
    /// Dairy free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dairy_free: Option<bool>,
    /// Flagged as very healthy by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub very_healthy: Option<bool>,
    /// Flagged as cheap by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheap: Option<bool>,
    /// Flagged as very popular by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub very_popular: Option<bool>,

    /// Provider health score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    /// Price per serving in US cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_serving: Option<f64>,
}

impl RecipeDetail {
    /// Number of ingredients, zero when the list is absent
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.extended_ingredients.as_ref().map_or(0, Vec::len)
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Normalized name; may be missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full original line, quantity included ("2 cups flour")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Name as written in the original line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    /// Quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Image file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Solid or liquid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<String>,
    /// Grocery store aisle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aisle: Option<String>,
}
