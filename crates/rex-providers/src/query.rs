// ABOUTME: Builds provider-bound paths and query strings from caller input
// ABOUTME: Pure functions; blank filters are dropped and nutrition enrichment is always requested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use url::form_urlencoded::Serializer;

use crate::constants::spoonacular::{AUTOCOMPLETE_PATH, COMPLEX_SEARCH_PATH};
use crate::models::SearchFilters;

/// Trimmed value, or `None` when absent or whitespace only
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Query string for a complex search
///
/// Always carries `query`, `offset`, `number` and `addRecipeNutrition=true`.
/// `diet`, `cuisine` and `type` follow only when the caller gave a non-blank value.
#[must_use]
pub fn search_query(filters: &SearchFilters) -> String {
    let mut serializer = Serializer::new(String::new());
    serializer
        .append_pair("query", &filters.query)
        .append_pair("offset", &filters.offset.to_string())
        .append_pair("number", &filters.effective_page_size().to_string())
        .append_pair("addRecipeNutrition", "true");

    if let Some(diet) = non_blank(filters.diet.as_deref()) {
        serializer.append_pair("diet", diet);
    }
    if let Some(cuisine) = non_blank(filters.cuisine.as_deref()) {
        serializer.append_pair("cuisine", cuisine);
    }
    if let Some(meal_type) = non_blank(filters.meal_type.as_deref()) {
        serializer.append_pair("type", meal_type);
    }

    serializer.finish()
}

/// Path and query for a complex search
#[must_use]
pub fn search_path(filters: &SearchFilters) -> String {
    format!("{COMPLEX_SEARCH_PATH}?{}", search_query(filters))
}

/// Path and query for a recipe detail lookup with nutrition
#[must_use]
pub fn detail_path(id: i64) -> String {
    format!("/recipes/{id}/information?includeNutrition=true")
}

/// Query string for title autocomplete
#[must_use]
pub fn autocomplete_query(query: &str, limit: u32) -> String {
    Serializer::new(String::new())
        .append_pair("query", query)
        .append_pair("number", &limit.to_string())
        .finish()
}

/// Path and query for title autocomplete
#[must_use]
pub fn autocomplete_path(query: &str, limit: u32) -> String {
    format!("{AUTOCOMPLETE_PATH}?{}", autocomplete_query(query, limit))
}
