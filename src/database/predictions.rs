// ABOUTME: CRUD operations for persisted prediction records
// ABOUTME: Insert, newest-first history listing, and lookup by record id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{PredictionInput, PredictionOutcome, PredictionRecord};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

/// Maximum rows returned by the history listing
const HISTORY_LIMIT: i64 = 100;

impl Database {
    /// Persist a prediction alongside the input it was derived from
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_prediction(
        &self,
        input: &PredictionInput,
        outcome: &PredictionOutcome,
    ) -> AppResult<PredictionRecord> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r"
            INSERT INTO gym_predictions (
                id, name, age, height_cm, weight_kg, situps_count, broad_jump_cm,
                predicted_class, probability, fitness_score, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(id.to_string())
        .bind(&input.name)
        .bind(i64::from(input.age))
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(i64::from(input.situps_count))
        .bind(input.broad_jump_cm)
        .bind(outcome.predicted_class.as_str())
        .bind(outcome.probability)
        .bind(outcome.fitness_score)
        .bind(now.to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create prediction: {e}")))?;

        Ok(PredictionRecord {
            id,
            name: input.name.clone(),
            age: input.age,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            situps_count: input.situps_count,
            broad_jump_cm: input.broad_jump_cm,
            predicted_class: outcome.predicted_class,
            probability: outcome.probability,
            fitness_score: outcome.fitness_score,
            created_at: now,
        })
    }

    /// List stored predictions, newest first, capped at 100 rows
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_predictions(&self) -> AppResult<Vec<PredictionRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, age, height_cm, weight_kg, situps_count, broad_jump_cm,
                   predicted_class, probability, fitness_score, created_at
            FROM gym_predictions
            ORDER BY created_at DESC
            LIMIT $1
            ",
        )
        .bind(HISTORY_LIMIT)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list predictions: {e}")))?;

        rows.iter().map(Self::row_to_record).collect()
    }

    /// Get a single prediction by its record id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_prediction(&self, id: Uuid) -> AppResult<Option<PredictionRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, name, age, height_cm, weight_kg, situps_count, broad_jump_cm,
                   predicted_class, probability, fitness_score, created_at
            FROM gym_predictions
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get prediction: {e}")))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> AppResult<PredictionRecord> {
        let id: String = row.get("id");
        let created_at: String = row.get("created_at");
        let predicted_class: String = row.get("predicted_class");
        let age: i64 = row.get("age");
        let situps_count: i64 = row.get("situps_count");

        Ok(PredictionRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::database(format!("Invalid record id '{id}': {e}")))?,
            name: row.get("name"),
            age: u32::try_from(age)
                .map_err(|e| AppError::database(format!("Invalid age in record: {e}")))?,
            height_cm: row.get("height_cm"),
            weight_kg: row.get("weight_kg"),
            situps_count: u32::try_from(situps_count)
                .map_err(|e| AppError::database(format!("Invalid situps count in record: {e}")))?,
            broad_jump_cm: row.get("broad_jump_cm"),
            predicted_class: predicted_class.parse()?,
            probability: row.get("probability"),
            fitness_score: row.get("fitness_score"),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| AppError::database(format!("Invalid timestamp in record: {e}")))?
                .with_timezone(&Utc),
        })
    }
}
