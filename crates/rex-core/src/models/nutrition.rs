// ABOUTME: Nutrition block attached to a recipe detail
// ABOUTME: Nutrient amounts are adjustable; every other sub-structure is pass-through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Nutrition facts for one serving of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    /// Nutrients in provider order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Vec<Nutrient>>,
    /// Derived properties (glycemic index, nutrition score, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    /// Flavonoid content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavonoids: Option<Vec<Flavonoid>>,
    /// Per-ingredient nutrient breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientNutrition>>,
    /// Share of calories from protein, fat and carbs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caloric_breakdown: Option<CaloricBreakdown>,
    /// Weight of one serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_per_serving: Option<WeightPerServing>,
}

/// A single nutrient line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    /// Nutrient name (Calories, Fat, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Amount per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Percentage of the daily recommended intake
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_daily_needs: Option<f64>,
}

/// Derived nutrition property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Flavonoid content line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flavonoid {
    /// Flavonoid name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Amount per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Nutrients contributed by one ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientNutrition {
    /// Ingredient identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Ingredient name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Quantity used in the recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Nutrients contributed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Vec<Nutrient>>,
}

/// Calorie split across macronutrients, in percent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaloricBreakdown {
    /// Percent of calories from protein
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_protein: Option<f64>,
    /// Percent of calories from fat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_fat: Option<f64>,
    /// Percent of calories from carbohydrates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_carbs: Option<f64>,
}

/// Serving weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightPerServing {
    /// Weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Unit of `amount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}
