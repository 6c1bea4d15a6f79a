// ABOUTME: Schema-tolerant decoding of Spoonacular response bodies into recipe DTOs
// ABOUTME: Empty and null bodies are valid outcomes; unknown keys are discarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::DeserializeOwned;

use crate::constants::spoonacular::PROVIDER_NAME;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::{AutocompleteSuggestion, RecipeDetail, SearchResponse};

/// Decode a body that may legitimately be absent
///
/// Returns `Ok(None)` for an empty, whitespace-only, or literal `null` body.
///
/// # Errors
///
/// Returns [`ProviderError::ParseError`] when the body is present but is not
/// a JSON document of the expected shape.
pub fn decode_optional<T: DeserializeOwned>(body: &str) -> ProviderResult<Option<T>> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    serde_json::from_str::<Option<T>>(trimmed).map_err(|e| ProviderError::ParseError {
        provider: PROVIDER_NAME.to_owned(),
        message: e.to_string(),
    })
}

/// Decode a complex search response
///
/// # Errors
///
/// Returns [`ProviderError::ParseError`] on malformed JSON.
pub fn search_response(body: &str) -> ProviderResult<SearchResponse> {
    Ok(decode_optional(body)?.unwrap_or_default())
}

/// Decode a recipe information response
///
/// # Errors
///
/// Returns [`ProviderError::ParseError`] on malformed JSON.
pub fn recipe_detail(body: &str) -> ProviderResult<Option<RecipeDetail>> {
    decode_optional(body)
}

/// Decode an autocomplete response
///
/// # Errors
///
/// Returns [`ProviderError::ParseError`] on malformed JSON.
pub fn autocomplete_suggestions(body: &str) -> ProviderResult<Vec<AutocompleteSuggestion>> {
    Ok(decode_optional(body)?.unwrap_or_default())
}
