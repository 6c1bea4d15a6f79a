// ABOUTME: Recipe API routes for search, detail, ingredient exclusion, and autocomplete
// ABOUTME: Translates query/path parameters into service calls and errors into the JSON envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! - `GET /api/recipes/search`
//! - `GET /api/recipes/autocomplete`
//! - `GET /api/recipes/health`
//! - `GET /api/recipes/:id`
//! - `GET /api/recipes/:id/exclude`

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, RawQuery, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use url::form_urlencoded;

use crate::constants::endpoints::RECIPES_BASE;
use crate::constants::errors::MSG_RECIPE_API_RUNNING;
use crate::constants::search::{DEFAULT_OFFSET, DEFAULT_PAGE_SIZE};
use crate::errors::{AppError, AppResult};
use crate::models::{AutocompleteSuggestion, RecipeDetail, SearchFilters, SearchResponse};
use crate::recipes::RecipeService;

/// Query parameter carrying ingredient exclusions
const EXCLUDE_PARAM: &str = "excludeIngredients";

/// Query parameters of `GET /api/recipes/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    pub query: Option<String>,
    /// Diet filter
    pub diet: Option<String>,
    /// Cuisine filter
    pub cuisine: Option<String>,
    /// Meal type filter
    #[serde(rename = "type")]
    pub meal_type: Option<String>,
    /// Results to skip
    pub offset: Option<i64>,
    /// Page size
    pub number: Option<i64>,
}

impl From<SearchParams> for SearchFilters {
    fn from(params: SearchParams) -> Self {
        Self {
            query: params.query.unwrap_or_default(),
            diet: params.diet,
            cuisine: params.cuisine,
            meal_type: params.meal_type,
            offset: params.offset.unwrap_or(DEFAULT_OFFSET),
            page_size: params.number.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Query parameters of `GET /api/recipes/autocomplete`
#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    /// Partial title
    #[serde(default)]
    pub query: String,
    /// Maximum suggestions
    pub number: Option<u32>,
}

/// Collect exclusion terms from a raw query string
///
/// Accepts repeated keys and comma-separated values alike; blank terms are dropped.
#[must_use]
pub fn parse_exclusions(raw_query: Option<&str>) -> Vec<String> {
    let Some(raw) = raw_query else {
        return Vec::new();
    };

    form_urlencoded::parse(raw.as_bytes())
        .filter(|(key, _)| key == EXCLUDE_PARAM)
        .flat_map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|term| !term.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn path_error(rejection: &PathRejection) -> AppError {
    AppError::invalid_input(format!("Invalid recipe id: {}", rejection.body_text()))
}

fn query_error(rejection: &QueryRejection) -> AppError {
    AppError::invalid_input(rejection.body_text())
}

/// Recipe API routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(service: Arc<RecipeService>) -> Router {
        let recipes = Router::new()
            .route("/search", get(Self::handle_search))
            .route("/autocomplete", get(Self::handle_autocomplete))
            .route("/health", get(Self::handle_health))
            .route("/:id", get(Self::handle_get_recipe))
            .route("/:id/exclude", get(Self::handle_get_with_exclusions))
            .with_state(service);

        Router::new().nest(RECIPES_BASE, recipes)
    }

    /// GET /api/recipes/search
    async fn handle_search(
        State(service): State<Arc<RecipeService>>,
        params: Result<Query<SearchParams>, QueryRejection>,
    ) -> AppResult<Json<SearchResponse>> {
        let Query(params) = params.map_err(|e| query_error(&e))?;
        let filters = SearchFilters::from(params);
        Ok(Json(service.search_recipes(&filters).await?))
    }

    /// GET `/api/recipes/:id`
    async fn handle_get_recipe(
        State(service): State<Arc<RecipeService>>,
        id: Result<Path<i64>, PathRejection>,
    ) -> AppResult<Json<RecipeDetail>> {
        let Path(id) = id.map_err(|e| path_error(&e))?;
        Ok(Json(service.get_recipe_by_id(id).await?))
    }

    /// GET `/api/recipes/:id/exclude?excludeIngredients=..`
    async fn handle_get_with_exclusions(
        State(service): State<Arc<RecipeService>>,
        id: Result<Path<i64>, PathRejection>,
        RawQuery(raw_query): RawQuery,
    ) -> AppResult<Json<RecipeDetail>> {
        let Path(id) = id.map_err(|e| path_error(&e))?;
        let exclusions = parse_exclusions(raw_query.as_deref());
        Ok(Json(
            service
                .get_recipe_with_exclusions(id, Some(&exclusions))
                .await?,
        ))
    }

    /// GET /api/recipes/autocomplete
    async fn handle_autocomplete(
        State(service): State<Arc<RecipeService>>,
        params: Result<Query<AutocompleteParams>, QueryRejection>,
    ) -> AppResult<Json<Vec<AutocompleteSuggestion>>> {
        let Query(params) = params.map_err(|e| query_error(&e))?;
        Ok(Json(service.autocomplete(&params.query, params.number).await))
    }

    /// GET /api/recipes/health
    async fn handle_health() -> &'static str {
        MSG_RECIPE_API_RUNNING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exclusions_repeated_and_comma_separated() {
        let terms = parse_exclusions(Some(
            "excludeIngredients=pasta&excludeIngredients=Tomato%20Sauce,%20basil&other=x",
        ));
        assert_eq!(terms, vec!["pasta", "Tomato Sauce", "basil"]);
    }

    #[test]
    fn test_parse_exclusions_blank() {
        assert!(parse_exclusions(None).is_empty());
        assert!(parse_exclusions(Some("excludeIngredients=&excludeIngredients=,,")).is_empty());
    }

    #[test]
    fn test_search_params_defaults() {
        let filters = SearchFilters::from(SearchParams::default());
        assert_eq!(filters.query, "");
        assert_eq!(filters.offset, 0);
        assert_eq!(filters.page_size, 12);
    }
}
