// ABOUTME: Spoonacular recipe API adapter implementing RecipeProvider
// ABOUTME: Sends the API key header, surfaces non-2xx answers as ApiError with their status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular `RecipeProvider` implementation
//!
//! API reference: <https://spoonacular.com/food-api/docs>

/// Response body decoding
pub mod payloads;

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::constants::spoonacular::{API_KEY_HEADER, DEFAULT_BASE_URL, PROVIDER_NAME};
use crate::core::RecipeProvider;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{AutocompleteSuggestion, RecipeDetail, SearchFilters, SearchResponse};
use crate::query::{autocomplete_path, detail_path, search_path};

/// Spoonacular connection settings
#[derive(Clone)]
pub struct SpoonacularConfig {
    /// Base URL without trailing path (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// API key sent in the `x-api-key` header
    pub api_key: String,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
        }
    }
}

impl fmt::Debug for SpoonacularConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpoonacularConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Spoonacular API adapter
pub struct SpoonacularProvider {
    config: SpoonacularConfig,
    client: Client,
}

impl SpoonacularProvider {
    /// Create an adapter on the shared HTTP client
    #[must_use]
    pub fn new(config: SpoonacularConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create an adapter on a caller-supplied HTTP client
    #[must_use]
    pub const fn with_client(config: SpoonacularConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn url(&self, path_and_query: &str) -> String {
        format!(
            "{}{path_and_query}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Issue one GET and return the raw body of a 2xx answer
    async fn get_body(&self, path_and_query: &str) -> ProviderResult<String> {
        let response = self
            .client
            .get(self.url(path_and_query))
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                provider: PROVIDER_NAME.to_owned(),
                status_code: status.as_u16(),
                message: format!("HTTP {status}: {body}"),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip(self), fields(provider = PROVIDER_NAME))]
    async fn search(&self, filters: &SearchFilters) -> ProviderResult<SearchResponse> {
        let body = self.get_body(&search_path(filters)).await?;
        let response = payloads::search_response(&body)?;
        debug!(
            total_results = ?response.total_results,
            returned = response.results.as_ref().map_or(0, Vec::len),
            "Search completed"
        );
        Ok(response)
    }

    #[instrument(skip(self), fields(provider = PROVIDER_NAME))]
    async fn get_detail(&self, id: i64) -> ProviderResult<Option<RecipeDetail>> {
        let body = self.get_body(&detail_path(id)).await?;
        payloads::recipe_detail(&body)
    }

    #[instrument(skip(self), fields(provider = PROVIDER_NAME))]
    async fn autocomplete(
        &self,
        query: &str,
        limit: u32,
    ) -> ProviderResult<Vec<AutocompleteSuggestion>> {
        let body = self.get_body(&autocomplete_path(query, limit)).await?;
        payloads::autocomplete_suggestions(&body)
    }
}
