// ABOUTME: Recipe service orchestrating provider calls, classification, and nutrition adjustment
// ABOUTME: Search, detail, detail-with-exclusions, and failure-tolerant autocomplete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use rex_core::constants::search::DEFAULT_AUTOCOMPLETE_LIMIT;
use rex_core::errors::{AppError, AppResult};
use rex_core::models::{AutocompleteSuggestion, RecipeDetail, SearchFilters, SearchResponse};
use rex_providers::RecipeProvider;
use tracing::{info, instrument, warn};

use super::classifier::{classify_detail_failure, classify_search_failure, recipe_not_found};
use super::nutrition::apply_exclusions;

/// Recipe operations backed by a single provider
///
/// Holds no per-request state; one instance serves all requests.
#[derive(Clone)]
pub struct RecipeService {
    provider: Arc<dyn RecipeProvider>,
}

impl RecipeService {
    /// Create a service over the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self { provider }
    }

    /// Name of the backing provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Search recipes
    ///
    /// # Errors
    ///
    /// `InvalidInput`/`ValueOutOfRange` for bad filters, `ExternalServiceUnavailable`
    /// for any provider failure.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn search_recipes(&self, filters: &SearchFilters) -> AppResult<SearchResponse> {
        if filters.offset < 0 {
            return Err(AppError::out_of_range("offset must not be negative"));
        }

        let response = self
            .provider
            .search(filters)
            .await
            .map_err(classify_search_failure)?;

        info!(
            found = response.results.as_ref().map_or(0, Vec::len),
            total_results = ?response.total_results,
            "Recipe search completed"
        );
        Ok(response)
    }

    /// Fetch one recipe with nutrition
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the provider has no such recipe,
    /// `ExternalServiceUnavailable` for other provider failures.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn get_recipe_by_id(&self, id: i64) -> AppResult<RecipeDetail> {
        let detail = self
            .provider
            .get_detail(id)
            .await
            .map_err(|e| classify_detail_failure(id, e))?
            .ok_or_else(|| recipe_not_found(id))?;

        info!(
            recipe_id = id,
            title = detail.title.as_deref().unwrap_or_default(),
            ingredients = detail.ingredient_count(),
            "Recipe fetched"
        );
        Ok(detail)
    }

    /// Fetch one recipe and scale its nutrients for excluded ingredients
    ///
    /// With no exclusions (absent or empty) the result equals
    /// [`Self::get_recipe_by_id`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_recipe_by_id`].
    pub async fn get_recipe_with_exclusions(
        &self,
        id: i64,
        exclusions: Option<&[String]>,
    ) -> AppResult<RecipeDetail> {
        let detail = self.get_recipe_by_id(id).await?;
        match exclusions {
            Some(terms) if !terms.is_empty() => Ok(apply_exclusions(detail, terms)),
            _ => Ok(detail),
        }
    }

    /// Suggest recipe titles
    ///
    /// Never fails: a blank query returns nothing without calling the
    /// provider, and provider failures degrade to an empty list.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn autocomplete(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Vec<AutocompleteSuggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let limit = limit.unwrap_or(DEFAULT_AUTOCOMPLETE_LIMIT);
        match self.provider.autocomplete(query, limit).await {
            Ok(suggestions) => {
                info!(count = suggestions.len(), "Autocomplete completed");
                suggestions
            }
            Err(e) => {
                warn!(error = %e, "Autocomplete failed, returning no suggestions");
                Vec::new()
            }
        }
    }
}
