// ABOUTME: HTTP integration tests for the prediction and health routes
// ABOUTME: Exercises validation, persistence, history listing, and lookup through Axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use fitclass_server::config::environment::{CorsConfig, LogLevel, ServerConfig};
use fitclass_server::database::Database;
use fitclass_server::intelligence::engine;
use fitclass_server::server::{router, ServerResources};
use helpers::AxumTestRequest;
use std::sync::Arc;

/// Load the process-wide engine with zero weights; later calls are no-ops
fn ensure_engine_loaded() {
    let file = helpers::zero_weights_file();
    let _ = engine::load_global(file.path());
}

async fn test_app() -> (axum::Router, tempfile::TempDir) {
    ensure_engine_loaded();

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let database = Database::new(&format!("sqlite:{}", db_path.display()))
        .await
        .unwrap();

    let config = ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        database_url: String::new(),
        weights_path: "unused".into(),
        cors: CorsConfig::default(),
    };

    let resources = Arc::new(ServerResources::new(database));
    (router(resources, &config), dir)
}

fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Route Tester",
        "age": 30,
        "height_cm": 175.0,
        "weight_kg": 70.0,
        "situps_count": 40,
        "broad_jump_cm": 220.0
    })
}

#[tokio::test]
async fn predict_returns_full_outcome_and_stores_record() {
    let (app, _dir) = test_app().await;

    let response = AxumTestRequest::post("/predict")
        .json(&valid_payload())
        .send(app.clone())
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.json();
    assert_eq!(body["success"], true);

    let prediction = &body["prediction"];
    // Zero weights always infer 0.5 -> class A, Low confidence
    assert_eq!(prediction["probability"], 0.5);
    assert_eq!(prediction["predicted_class"], "A");
    assert_eq!(prediction["confidence"], "Low");
    assert_eq!(prediction["fitness_score"], 86.0);
    assert_eq!(prediction["exercises"].as_array().unwrap().len(), 6);
    assert_eq!(prediction["nutrition"].as_array().unwrap().len(), 4);
    assert_eq!(prediction["goals"].as_array().unwrap().len(), 4);

    let record = &body["record"];
    assert_eq!(record["name"], "Route Tester");
    assert_eq!(record["predicted_class"], "A");
    assert!(record["id"].as_str().is_some());
}

#[tokio::test]
async fn predict_rejects_out_of_range_metrics() {
    let (app, _dir) = test_app().await;

    let mut payload = valid_payload();
    payload["age"] = serde_json::json!(9);

    let response = AxumTestRequest::post("/predict")
        .json(&payload)
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["details"]["field"], "age");
}

#[tokio::test]
async fn predict_rejects_missing_name() {
    let (app, _dir) = test_app().await;

    let mut payload = valid_payload();
    payload["name"] = serde_json::json!("   ");

    let response = AxumTestRequest::post("/predict")
        .json(&payload)
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn history_lists_stored_predictions_newest_first() {
    let (app, _dir) = test_app().await;

    for name in ["First", "Second"] {
        let mut payload = valid_payload();
        payload["name"] = serde_json::json!(name);
        let response = AxumTestRequest::post("/predict")
            .json(&payload)
            .send(app.clone())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = AxumTestRequest::get("/predictions").send(app).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.json();
    assert_eq!(body["success"], true);
    let predictions = body["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 2);
}

#[tokio::test]
async fn lookup_by_id_round_trips() {
    let (app, _dir) = test_app().await;

    let created = AxumTestRequest::post("/predict")
        .json(&valid_payload())
        .send(app.clone())
        .await
        .json();
    let id = created["record"]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::get(&format!("/predictions/{id}"))
        .send(app)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.json();
    assert_eq!(body["prediction"]["id"], id.as_str());
    assert_eq!(body["prediction"]["name"], "Route Tester");
}

#[tokio::test]
async fn lookup_of_unknown_id_returns_not_found() {
    let (app, _dir) = test_app().await;

    let response =
        AxumTestRequest::get("/predictions/00000000-0000-4000-8000-000000000000")
            .send(app)
            .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn lookup_with_malformed_id_is_a_client_error() {
    let (app, _dir) = test_app().await;

    let response = AxumTestRequest::get("/predictions/not-a-uuid").send(app).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoint_reports_status() {
    let (app, _dir) = test_app().await;

    let response = AxumTestRequest::get("/health").send(app.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");

    // The engine is loaded in this process, so readiness reports ready
    let response = AxumTestRequest::get("/ready").send(app).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json()["engine_loaded"], true);
}
