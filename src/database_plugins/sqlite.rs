// ABOUTME: SQLite database implementation for the ingredient catalog and recipe store
// ABOUTME: Default backend for local development, tests and in-memory runs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! SQLite database implementation

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use fridge_core::errors::{AppError, AppResult};
use fridge_core::models::{Ingredient, Recipe};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, Transaction};
use tracing::debug;

use super::DatabaseProvider;
use crate::seed::{SeedPlan, SeedSummary};

const RECIPE_COLUMNS: &str =
    "r.id, r.name, r.cuisine, r.total_time_in_mins, r.ingredient_count, r.url, r.instructions";

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn is_memory_url(database_url: &str) -> bool {
        database_url.contains(":memory:") || database_url.contains("mode=memory")
    }

    /// Make sure the directory holding a file database exists
    fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
        let path = database_url
            .trim_start_matches("sqlite:")
            .trim_start_matches("//");
        let path = path.split('?').next().unwrap_or(path);
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!(
                        "Cannot create database directory {}",
                        parent.display()
                    ))
                    .with_source(e)
                })?;
            }
        }
        Ok(())
    }

    fn recipe_from_row(row: &SqliteRow) -> AppResult<Recipe> {
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

    async fn clear_all(tx: &mut Transaction<'_, Sqlite>) -> AppResult<()> {
        for table in ["recipe_ingredients", "recipes", "ingredients", "categories"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str, max_connections: u32) -> AppResult<Self> {
        let memory = Self::is_memory_url(database_url);
        let connection_options = if memory || database_url.contains('?') {
            database_url.to_owned()
        } else {
            Self::ensure_parent_dir(database_url)?;
            format!("{database_url}?mode=rwc")
        };

        // Every connection to :memory: opens its own database, so keep exactly one alive
        let options = if memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = options.connect(&connection_options).await?;
        Ok(Self { pool })
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
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
                recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                ingredient_id INTEGER NOT NULL REFERENCES ingredients(id) ON DELETE CASCADE,
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

        debug!("SQLite schema ready");
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

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id FROM ingredients WHERE LOWER(name) IN (");
        let mut separated = builder.separated(", ");
        for name in normalized_names {
            separated.push_bind(name.as_str());
        }
        separated.push_unseparated(") ORDER BY id ASC");

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| row.try_get::<i64, _>("id").map_err(AppError::from))
            .collect()
    }

    async fn find_recipes_covered_by(&self, ingredient_ids: &[i64]) -> AppResult<Vec<Recipe>> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes r \
             JOIN recipe_ingredients ri ON ri.recipe_id = r.id \
             WHERE ri.ingredient_id IN ("
        ));
        let mut separated = builder.separated(", ");
        for id in ingredient_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(format!(
            ") GROUP BY {RECIPE_COLUMNS} \
             HAVING COUNT(DISTINCT ri.ingredient_id) = r.ingredient_count \
             ORDER BY r.ingredient_count ASC, r.id ASC"
        ));

        let rows = builder.build().fetch_all(&self.pool).await?;
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
            let inserted = sqlx::query("INSERT OR IGNORE INTO categories (name) VALUES ($1)")
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
            let inserted =
                sqlx::query("INSERT OR IGNORE INTO ingredients (name, category_id) VALUES ($1, $2)")
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
            let recipe_id = sqlx::query(
                r"
                INSERT INTO recipes (name, total_time_in_mins, cuisine, instructions, url, ingredient_count)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(&recipe.name)
            .bind(recipe.total_time_in_mins)
            .bind(&recipe.cuisine)
            .bind(&recipe.instructions)
            .bind(&recipe.url)
            .bind(recipe.ingredient_count())
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
            summary.recipes += 1;

            for name in &recipe.ingredients {
                let ingredient_id = ingredient_ids.get(name.as_str()).copied().ok_or_else(|| {
                    AppError::internal(format!("Seed ingredient '{name}' was not written"))
                })?;
                sqlx::query(
                    "INSERT OR IGNORE INTO recipe_ingredients (recipe_id, ingredient_id) VALUES ($1, $2)",
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
