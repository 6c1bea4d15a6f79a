// ABOUTME: Core recipe provider trait implemented by every upstream adapter
// ABOUTME: One outbound call per operation, failures reported as ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;

use crate::errors::provider::ProviderResult;
use crate::models::{AutocompleteSuggestion, RecipeDetail, SearchFilters, SearchResponse};

/// Upstream recipe data source
///
/// Implementations must not retry and must not translate failures into
/// client-facing errors; classification happens in the service layer.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Provider name for logs and error context
    fn name(&self) -> &'static str;

    /// Run a filtered search
    ///
    /// An empty provider body yields an empty [`SearchResponse`].
    async fn search(&self, filters: &SearchFilters) -> ProviderResult<SearchResponse>;

    /// Fetch a full recipe, nutrition included
    ///
    /// `Ok(None)` means the provider answered without a body, which is
    /// distinct from a transport failure.
    async fn get_detail(&self, id: i64) -> ProviderResult<Option<RecipeDetail>>;

    /// Suggest recipe titles for a partial query
    async fn autocomplete(
        &self,
        query: &str,
        limit: u32,
    ) -> ProviderResult<Vec<AutocompleteSuggestion>>;
}
