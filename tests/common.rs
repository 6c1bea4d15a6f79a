// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted recipe provider, sample recipes, and router helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::panic
)]
//! Shared test utilities for `rex_recipe_server`

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rex_core::errors::{ProviderError, ProviderResult};
use rex_core::models::{
    AutocompleteSuggestion, CaloricBreakdown, Ingredient, Nutrient, NutritionInfo, Property,
    RecipeDetail, SearchFilters, SearchResponse, SearchResult,
};
use rex_providers::RecipeProvider;
use rex_recipe_server::config::CorsConfig;
use rex_recipe_server::recipes::RecipeService;
use rex_recipe_server::server::build_router;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// What the scripted provider does on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Return the sample payloads
    Succeed,
    /// Answer without a body
    Absent,
    /// Fail with an HTTP 404 from upstream
    NotFound,
    /// Fail before any response arrives
    Unavailable,
    /// Panic inside the provider call
    Panic,
}

/// Recipe provider that replays a fixed outcome and records calls
pub struct ScriptedProvider {
    outcome: Outcome,
    detail: RecipeDetail,
    calls: AtomicUsize,
    last_filters: Mutex<Option<SearchFilters>>,
}

impl ScriptedProvider {
    pub fn new(outcome: Outcome) -> Self {
        Self::with_detail(outcome, sample_recipe())
    }

    pub fn with_detail(outcome: Outcome, detail: RecipeDetail) -> Self {
        Self {
            outcome,
            detail,
            calls: AtomicUsize::new(0),
            last_filters: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_filters(&self) -> Option<SearchFilters> {
        self.last_filters.lock().unwrap().clone()
    }

    fn failure(&self) -> Option<ProviderError> {
        match self.outcome {
            Outcome::Panic => panic!("scripted provider blew up"),
            Outcome::NotFound => Some(ProviderError::ApiError {
                provider: "scripted".to_owned(),
                status_code: 404,
                message: "HTTP 404 Not Found: ".to_owned(),
            }),
            Outcome::Unavailable => Some(ProviderError::NetworkError(
                "connection refused (os error 111)".to_owned(),
            )),
            Outcome::Succeed | Outcome::Absent => None,
        }
    }
}

#[async_trait]
impl RecipeProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn search(&self, filters: &SearchFilters) -> ProviderResult<SearchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filters.lock().unwrap() = Some(filters.clone());
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(match self.outcome {
            Outcome::Absent => SearchResponse::default(),
            _ => sample_search(),
        })
    }

    async fn get_detail(&self, _id: i64) -> ProviderResult<Option<RecipeDetail>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(match self.outcome {
            Outcome::Absent => None,
            _ => Some(self.detail.clone()),
        })
    }

    async fn autocomplete(
        &self,
        _query: &str,
        limit: u32,
    ) -> ProviderResult<Vec<AutocompleteSuggestion>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(sample_suggestions()
            .into_iter()
            .take(limit as usize)
            .collect())
    }
}

fn nutrient(name: &str, amount: Option<f64>, unit: &str, percent: Option<f64>) -> Nutrient {
    Nutrient {
        name: Some(name.to_owned()),
        amount,
        unit: Some(unit.to_owned()),
        percent_of_daily_needs: percent,
    }
}

fn named_ingredient(id: i64, name: Option<&str>, original: &str) -> Ingredient {
    Ingredient {
        id: Some(id),
        name: name.map(str::to_owned),
        original: Some(original.to_owned()),
        amount: Some(1.0),
        unit: Some("serving".to_owned()),
        ..Ingredient::default()
    }
}

/// Three-ingredient carbonara with a small nutrition block
pub fn sample_recipe() -> RecipeDetail {
    RecipeDetail {
        id: Some(42),
        title: Some("Pasta Carbonara".to_owned()),
        servings: Some(2),
        ready_in_minutes: Some(25),
        vegetarian: Some(false),
        extended_ingredients: Some(vec![
            named_ingredient(1, Some("Spaghetti Pasta"), "200 g spaghetti pasta"),
            named_ingredient(2, Some("eggs"), "2 eggs"),
            named_ingredient(3, Some("pecorino cheese"), "50 g pecorino cheese"),
        ]),
        nutrition: Some(NutritionInfo {
            nutrients: Some(vec![
                nutrient("Calories", Some(600.0), "kcal", Some(30.0)),
                nutrient("Fat", Some(24.5), "g", Some(37.69)),
                nutrient("Sugar", Some(3.0), "g", None),
                nutrient("Vitamin K", None, "µg", None),
            ]),
            properties: Some(vec![Property {
                name: Some("Glycemic Index".to_owned()),
                amount: Some(55.0),
                unit: Some(String::new()),
            }]),
            caloric_breakdown: Some(CaloricBreakdown {
                percent_protein: Some(18.5),
                percent_fat: Some(36.8),
                percent_carbs: Some(44.7),
            }),
            ..NutritionInfo::default()
        }),
        ..RecipeDetail::default()
    }
}

/// Two-hit search page with 100 total results
pub fn sample_search() -> SearchResponse {
    SearchResponse {
        results: Some(vec![
            SearchResult {
                id: Some(42),
                title: Some("Pasta Carbonara".to_owned()),
                image_url: Some("https://img.example.com/42.jpg".to_owned()),
                image_type: Some("jpg".to_owned()),
            },
            SearchResult {
                id: Some(43),
                title: Some("Pasta Primavera".to_owned()),
                image_url: None,
                image_type: None,
            },
        ]),
        offset: Some(0),
        page_size: Some(12),
        total_results: Some(100),
    }
}

pub fn sample_suggestions() -> Vec<AutocompleteSuggestion> {
    vec![
        AutocompleteSuggestion {
            id: Some(1),
            title: Some("chicken soup".to_owned()),
            image_type: Some("jpg".to_owned()),
        },
        AutocompleteSuggestion {
            id: Some(2),
            title: Some("chickpea curry".to_owned()),
            image_type: Some("png".to_owned()),
        },
    ]
}

/// Router over a scripted provider, with the provider handle for call assertions
pub fn scripted_app(outcome: Outcome) -> (Router, Arc<ScriptedProvider>) {
    init_test_logging();
    let provider = Arc::new(ScriptedProvider::new(outcome));
    let service = Arc::new(RecipeService::new(provider.clone()));
    let cors = CorsConfig {
        allowed_origins: "*".to_owned(),
    };
    (build_router(service, &cors), provider)
}

/// Send a GET and return status plus the raw body
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Send a GET and parse the body as JSON
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

/// Assert two floats are equal to the cent
pub fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
