// ABOUTME: Database management for prediction record persistence
// ABOUTME: Owns the SQLite pool and startup schema migration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitClass

//! # Database Management
//!
//! This module provides `SQLite` persistence for prediction records. The
//! pool is created once at startup; the schema migration runs before the
//! server accepts traffic.

mod predictions;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::info;

/// Database manager for prediction record storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && database_url != "sqlite::memory:" {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS gym_predictions (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                height_cm REAL NOT NULL,
                weight_kg REAL NOT NULL,
                situps_count INTEGER NOT NULL,
                broad_jump_cm REAL NOT NULL,
                predicted_class TEXT NOT NULL,
                probability REAL NOT NULL,
                fitness_score REAL NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_gym_predictions_created_at
            ON gym_predictions (created_at DESC)
            ",
        )
        .execute(&self.pool)
        .await?;

        info!("database migrations completed");
        Ok(())
    }
}
