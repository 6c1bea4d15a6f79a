// ABOUTME: End-to-end tests from HTTP route through the Spoonacular adapter to a mock upstream
// ABOUTME: Checks outgoing query shaping and upstream status classification through the full stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use common::{get, get_json, init_test_logging};
use rex_core::errors::ErrorCode;
use rex_providers::http_client::build_client;
use rex_providers::{RecipeProvider, SpoonacularConfig, SpoonacularProvider};
use rex_recipe_server::config::CorsConfig;
use rex_recipe_server::recipes::RecipeService;
use rex_recipe_server::server::build_router;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> Router {
    init_test_logging();
    let provider: Arc<dyn RecipeProvider> = Arc::new(SpoonacularProvider::with_client(
        SpoonacularConfig {
            base_url: server.uri(),
            api_key: "e2e-key".to_owned(),
        },
        build_client(5, 2),
    ));
    build_router(
        Arc::new(RecipeService::new(provider)),
        &CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    )
}

#[tokio::test]
async fn test_out_of_range_page_size_is_sent_as_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "offset": 0,
            "number": 12,
            "totalResults": 0
        })))
        .mount(&server)
        .await;

    let (status, body) = get_json(
        app_for(&server),
        "/api/recipes/search?query=stew&number=500&diet=%20&type=main%20course",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalResults"], 0);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("number".to_owned(), "12".to_owned())));
    assert!(pairs.contains(&("type".to_owned(), "main course".to_owned())));
    assert!(pairs.contains(&("addRecipeNutrition".to_owned(), "true".to_owned())));
    assert!(!pairs.iter().any(|(k, _)| k == "diet" || k == "cuisine"));
}

#[tokio::test]
async fn test_upstream_404_on_detail_becomes_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/31337/information"))
        .and(query_param("includeNutrition", "true"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such recipe"))
        .mount(&server)
        .await;

    let (status, body) = get_json(app_for(&server), "/api/recipes/31337").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Recipe not found with id: 31337");
}

#[tokio::test]
async fn test_upstream_402_quota_is_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(402).set_body_string("daily points limit reached"))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/recipes/search?query=pie").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!body.contains("points limit"));
}

#[tokio::test]
async fn test_exclusions_applied_to_upstream_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/7/information"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "title": "Tomato Basil Pasta",
            "extendedIngredients": [
                {"id": 1, "name": "pasta"},
                {"id": 2, "name": "tomato"},
                {"id": 3, "name": "basil"},
                {"id": 4, "name": "olive oil"}
            ],
            "nutrition": {
                "nutrients": [
                    {"name": "Calories", "amount": 500.0, "unit": "kcal", "percentOfDailyNeeds": 25.0}
                ]
            },
            "unknownUpstreamField": {"ignored": true}
        })))
        .mount(&server)
        .await;

    let (status, body) = get_json(
        app_for(&server),
        "/api/recipes/7/exclude?excludeIngredients=Pasta",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nutrition"]["nutrients"][0]["amount"], 375.0);
    assert_eq!(body["nutrition"]["nutrients"][0]["percentOfDailyNeeds"], 18.75);
    assert!(body.get("unknownUpstreamField").is_none());
}

#[tokio::test]
async fn test_autocomplete_upstream_error_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/autocomplete"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/api/recipes/autocomplete?query=ta").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_unreachable_provider_on_id_with_404_digits_is_503() {
    init_test_logging();
    let provider: Arc<dyn RecipeProvider> = Arc::new(SpoonacularProvider::with_client(
        SpoonacularConfig {
            base_url: "http://127.0.0.1:1".to_owned(),
            api_key: "e2e-key".to_owned(),
        },
        build_client(2, 1),
    ));
    let service = Arc::new(RecipeService::new(provider));

    let error = service.get_recipe_by_id(4040).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);

    let app = build_router(
        service,
        &CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    );
    let (status, body) = get_json(app, "/api/recipes/14045").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["message"],
        "External API service unavailable. Please try again later."
    );
}
