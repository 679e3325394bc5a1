// ABOUTME: PostgreSQL database implementation for the ingredient catalog and recipe store
// ABOUTME: Cloud deployment backend implementing the same interface as the SQLite version
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! PostgreSQL database implementation
//!
//! This module provides PostgreSQL support for cloud deployments,
//! implementing the same interface as the SQLite version.

use std::collections::HashMap;

use async_trait::async_trait;
use fridge_core::errors::{AppError, AppResult};
use fridge_core::models::{Ingredient, Recipe};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Postgres, Row, Transaction};
use tracing::debug;

use super::DatabaseProvider;
use crate::seed::{SeedPlan, SeedSummary};

/// PostgreSQL database implementation
#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn recipe_from_row(row: &PgRow) -> AppResult<Recipe> {
        Ok(Recipe {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            cuisine: row.try_get("cuisine")?,
            total_time_in_mins: row.try_get("total_time_in_mins")?,
            ingredient_count: row.try_get("ingredient_count")?,
            url: row.try_get("url")?,
            instructions: row.try_get("instructions")?,
        })
    }

    async fn clear_all(tx: &mut Transaction<'_, Postgres>) -> AppResult<()> {
        sqlx::query(
            "TRUNCATE recipe_ingredients, recipes, ingredients, categories RESTART IDENTITY CASCADE",
        )
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl DatabaseProvider for PostgresDatabase {
    async fn new(database_url: &str, max_connections: u32) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS categories (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                category_id BIGINT REFERENCES categories(id) ON DELETE SET NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                total_time_in_mins INTEGER,
                cuisine TEXT,
                instructions TEXT,
                url TEXT,
                ingredient_count INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                recipe_id BIGINT NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                ingredient_id BIGINT NOT NULL REFERENCES ingredients(id) ON DELETE CASCADE,
                PRIMARY KEY (recipe_id, ingredient_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_ingredient ON recipe_ingredients(ingredient_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_ingredients_lower_name ON ingredients(LOWER(name))",
        )
        .execute(&self.pool)
        .await?;

        debug!("PostgreSQL schema ready");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        // Touches the schema, not just the connection
        sqlx::query("SELECT 1 FROM recipes LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query(
            r"
            SELECT i.name AS name, c.name AS category
            FROM ingredients i
            JOIN categories c ON c.id = i.category_id
            ORDER BY c.name ASC, i.name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> AppResult<Ingredient> {
                let name: String = row.try_get("name")?;
                let category: String = row.try_get("category")?;
                Ok(Ingredient::new(name, category))
            })
            .collect()
    }

    async fn resolve_ingredient_ids(&self, normalized_names: &[String]) -> AppResult<Vec<i64>> {
        if normalized_names.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query("SELECT id FROM ingredients WHERE LOWER(name) = ANY($1) ORDER BY id ASC")
            .bind(normalized_names)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<i64, _>("id").map_err(AppError::from))
            .collect()
    }

    async fn find_recipes_covered_by(&self, ingredient_ids: &[i64]) -> AppResult<Vec<Recipe>> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r"
            SELECT r.id, r.name, r.cuisine, r.total_time_in_mins, r.ingredient_count, r.url, r.instructions
            FROM recipes r
            JOIN recipe_ingredients ri ON ri.recipe_id = r.id
            WHERE ri.ingredient_id = ANY($1)
            GROUP BY r.id
            HAVING COUNT(DISTINCT ri.ingredient_id) = r.ingredient_count
            ORDER BY r.ingredient_count ASC, r.id ASC
            ",
        )
        .bind(ingredient_ids)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::recipe_from_row).collect()
    }

    async fn recipe_count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    async fn load_seed(&self, plan: &SeedPlan, reset: bool) -> AppResult<SeedSummary> {
        let mut tx = self.pool.begin().await?;
        if reset {
            Self::clear_all(&mut tx).await?;
        }

        let mut summary = SeedSummary::default();

        let mut category_ids: HashMap<&str, i64> = HashMap::with_capacity(plan.categories.len());
        for category in &plan.categories {
            let inserted =
                sqlx::query("INSERT INTO categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
                    .bind(category)
                    .execute(&mut *tx)
                    .await?;
            summary.categories += usize::try_from(inserted.rows_affected()).unwrap_or(0);

            let id: i64 = sqlx::query("SELECT id FROM categories WHERE name = $1")
                .bind(category)
                .fetch_one(&mut *tx)
                .await?
                .try_get("id")?;
            category_ids.insert(category.as_str(), id);
        }

        let mut ingredient_ids: HashMap<&str, i64> = HashMap::with_capacity(plan.ingredients.len());
        for ingredient in &plan.ingredients {
            let category_id = category_ids.get(ingredient.category.as_str()).copied();
            let inserted = sqlx::query(
                "INSERT INTO ingredients (name, category_id) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
            )
            .bind(&ingredient.name)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
            summary.ingredients += usize::try_from(inserted.rows_affected()).unwrap_or(0);

            let id: i64 = sqlx::query("SELECT id FROM ingredients WHERE name = $1")
                .bind(&ingredient.name)
                .fetch_one(&mut *tx)
                .await?
                .try_get("id")?;
            ingredient_ids.insert(ingredient.name.as_str(), id);
        }

        for recipe in &plan.recipes {
            let recipe_id: i64 = sqlx::query(
                r"
                INSERT INTO recipes (name, total_time_in_mins, cuisine, instructions, url, ingredient_count)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                ",
            )
            .bind(&recipe.name)
            .bind(recipe.total_time_in_mins)
            .bind(&recipe.cuisine)
            .bind(&recipe.instructions)
            .bind(&recipe.url)
            .bind(recipe.ingredient_count())
            .fetch_one(&mut *tx)
            .await?
            .try_get("id")?;
            summary.recipes += 1;

            for name in &recipe.ingredients {
                let ingredient_id = ingredient_ids.get(name.as_str()).copied().ok_or_else(|| {
                    AppError::internal(format!("Seed ingredient '{name}' was not written"))
                })?;
                sqlx::query(
                    "INSERT INTO recipe_ingredients (recipe_id, ingredient_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
                )
                .bind(recipe_id)
                .bind(ingredient_id)
                .execute(&mut *tx)
                .await?;
                summary.links += 1;
            }
        }

        tx.commit().await?;
        Ok(summary)
    }
}
