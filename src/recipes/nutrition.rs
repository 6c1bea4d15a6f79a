// ABOUTME: Scales nutrient amounts down when the caller excludes ingredients
// ABOUTME: Linear approximation by excluded-ingredient count; the ingredient list is never altered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition adjustment for excluded ingredients
//!
//! The reduction is `excluded / total` by ingredient count, applied uniformly
//! to every nutrient. It is an approximation and makes no attempt at a true
//! per-ingredient recomputation. Excluded ingredients stay in the list so the
//! client can strike them through.

use rex_core::models::{Ingredient, Nutrient, RecipeDetail};
use tracing::debug;

/// Round half up to two decimals
#[must_use]
#[allow(clippy::suboptimal_flops)] // scaled value must be rounded before the half is added
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Lower-cased, trimmed, non-blank exclusion terms
fn normalize_terms(exclusions: &[String]) -> Vec<String> {
    exclusions
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Whether an ingredient's name contains any of the terms
///
/// Ingredients without a name never match.
fn is_excluded(ingredient: &Ingredient, terms: &[String]) -> bool {
    ingredient.name.as_deref().is_some_and(|name| {
        let name = name.to_lowercase();
        terms.iter().any(|term| name.contains(term.as_str()))
    })
}

/// Share of ingredients matched by the exclusion terms
///
/// `None` when there is nothing to adjust: no terms, no ingredients, or no match.
#[must_use]
pub fn reduction_ratio(ingredients: &[Ingredient], exclusions: &[String]) -> Option<f64> {
    let terms = normalize_terms(exclusions);
    if terms.is_empty() || ingredients.is_empty() {
        return None;
    }

    let excluded = ingredients
        .iter()
        .filter(|ingredient| is_excluded(ingredient, &terms))
        .count();

    if excluded == 0 {
        return None;
    }

    Some(excluded as f64 / ingredients.len() as f64)
}

fn scale_nutrient(nutrient: &mut Nutrient, factor: f64) {
    nutrient.amount = nutrient.amount.map(|amount| round2(amount * factor));
    nutrient.percent_of_daily_needs = nutrient
        .percent_of_daily_needs
        .map(|percent| round2(percent * factor));
}

/// Apply ingredient exclusions to a recipe's nutrients
///
/// Terms are trimmed and lowercased before matching, and blank terms are
/// dropped, so a list of only blank terms changes nothing.
///
/// Returns the detail unchanged when no term matches. Only top-level nutrient
/// amounts and daily-need percentages change; properties, flavonoids, the
/// per-ingredient breakdown, caloric breakdown, and serving weight pass through.
#[must_use]
pub fn apply_exclusions(mut detail: RecipeDetail, exclusions: &[String]) -> RecipeDetail {
    let Some(ingredients) = detail.extended_ingredients.as_deref() else {
        return detail;
    };
    let Some(ratio) = reduction_ratio(ingredients, exclusions) else {
        return detail;
    };

    let factor = 1.0 - ratio;
    debug!(
        recipe_id = ?detail.id,
        reduction_ratio = ratio,
        "Scaling nutrients for excluded ingredients"
    );

    if let Some(nutrients) = detail
        .nutrition
        .as_mut()
        .and_then(|nutrition| nutrition.nutrients.as_mut())
    {
        for nutrient in nutrients.iter_mut() {
            scale_nutrient(nutrient, factor);
        }
    }

    detail
}
