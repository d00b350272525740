// ABOUTME: Prediction route handlers for classification and history retrieval
// ABOUTME: Validates input ranges, runs the pipeline, and persists each prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! Prediction routes
//!
//! `POST /predict` validates the submitted metrics, runs the inference
//! pipeline, stores the record, and returns the full outcome.
//! `GET /predictions` and `GET /predictions/:id` read back stored records.

use crate::{errors::AppError, intelligence, models::PredictionInput, server::ServerResources};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

/// Prediction routes implementation
pub struct PredictionRoutes;

impl PredictionRoutes {
    /// Create all prediction routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/predict", post(Self::handle_predict))
            .route("/predictions", get(Self::handle_list_predictions))
            .route("/predictions/:id", get(Self::handle_get_prediction))
            .with_state(resources)
    }

    /// Handle a classification request
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        Json(input): Json<PredictionInput>,
    ) -> Result<Response, AppError> {
        input.validate()?;

        let mut outcome = intelligence::predict_and_recommend(&input)?;
        // Match the public contract: probability reported to 4 decimal places
        outcome.probability = (outcome.probability * 10_000.0).round() / 10_000.0;

        let record = resources.database.create_prediction(&input, &outcome).await?;

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "prediction": outcome,
                "record": record,
            })),
        )
            .into_response())
    }

    /// Handle the prediction history listing
    async fn handle_list_predictions(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let predictions = resources.database.list_predictions().await?;

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "predictions": predictions,
            })),
        )
            .into_response())
    }

    /// Handle a single-record lookup
    async fn handle_get_prediction(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Uuid::parse_str(&id)
            .map_err(|_| AppError::invalid_input(format!("Invalid prediction id: {id}")))?;

        let record = resources
            .database
            .get_prediction(id)
            .await?
            .ok_or_else(|| AppError::not_found("Prediction").with_resource_id(id.to_string()))?;

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "prediction": record,
            })),
        )
            .into_response())
    }
}
