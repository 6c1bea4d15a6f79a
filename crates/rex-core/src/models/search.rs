// ABOUTME: Recipe search models: caller filters, summary results, and the paged response
// ABOUTME: Page size defaulting and clamping lives on SearchFilters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::search::{DEFAULT_OFFSET, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Caller-supplied search filters, built once per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    /// Free-text query; empty means "anything"
    pub query: String,
    /// Diet filter (vegetarian, vegan, ...)
    pub diet: Option<String>,
    /// Cuisine filter (italian, thai, ...)
    pub cuisine: Option<String>,
    /// Meal type filter (main course, dessert, ...)
    pub meal_type: Option<String>,
    /// Number of results to skip
    pub offset: i64,
    /// Requested page size, see [`Self::effective_page_size`]
    pub page_size: i64,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            diet: None,
            cuisine: None,
            meal_type: None,
            offset: DEFAULT_OFFSET,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchFilters {
    /// Filters for a plain text query with default paging
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set the diet filter
    #[must_use]
    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    /// Set the cuisine filter
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Set the meal type filter
    #[must_use]
    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    /// Set paging
    #[must_use]
    pub const fn with_paging(mut self, offset: i64, page_size: i64) -> Self {
        self.offset = offset;
        self.page_size = page_size;
        self
    }

    /// Page size actually sent to the provider
    ///
    /// Anything outside `[1, 100]` falls back to 12 rather than being clamped
    /// to the nearest bound.
    #[must_use]
    pub const fn effective_page_size(&self) -> i64 {
        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

/// Summary record for one search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Recipe identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Recipe title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Image URL
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Image file extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
}

/// One page of search results
///
/// Pagination fields are passed through from the provider untouched, a
/// `totalResults` of 0 included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Hits in provider order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
    /// Offset of the first hit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Page size the provider applied
    #[serde(rename = "number", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    /// Total hits across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<i64>,
}
