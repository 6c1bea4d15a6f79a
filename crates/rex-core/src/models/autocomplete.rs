// ABOUTME: Autocomplete suggestion model
// ABOUTME: Lightweight title lookup entry returned while the user types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One recipe title suggestion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteSuggestion {
    /// Recipe identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Recipe title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Image file extension (jpg, png)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
}
