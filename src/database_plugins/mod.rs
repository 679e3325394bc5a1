// ABOUTME: Database abstraction layer for the recipe service
// ABOUTME: Plugin architecture for database support with SQLite and PostgreSQL backends
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use async_trait::async_trait;
use fridge_core::errors::AppResult;
use fridge_core::models::{Ingredient, Recipe};

use crate::seed::{SeedPlan, SeedSummary};

pub mod factory;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer. The read path never
/// opens a transaction; only seeding writes.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Open a connection pool
    async fn new(database_url: &str, max_connections: u32) -> AppResult<Self>
    where
        Self: Sized;

    /// Create the schema if it does not exist yet
    async fn migrate(&self) -> AppResult<()>;

    /// Run a trivial query against the schema to prove the store answers
    async fn health_check(&self) -> AppResult<()>;

    // ================================
    // Catalog
    // ================================

    /// Every ingredient that has a category, ordered by category then name
    async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>>;

    /// Ids of the ingredients whose lower-cased name is in `normalized_names`
    ///
    /// Names that match nothing are dropped without error.
    async fn resolve_ingredient_ids(&self, normalized_names: &[String]) -> AppResult<Vec<i64>>;

    // ================================
    // Recipes
    // ================================

    /// Recipes whose whole required ingredient set lies within `ingredient_ids`
    ///
    /// Ordered by ascending ingredient count, then id.
    async fn find_recipes_covered_by(&self, ingredient_ids: &[i64]) -> AppResult<Vec<Recipe>>;

    /// Number of stored recipes
    async fn recipe_count(&self) -> AppResult<i64>;

    // ================================
    // Seeding
    // ================================

    /// Write a seed plan in one transaction, clearing existing rows when `reset`
    async fn load_seed(&self, plan: &SeedPlan, reset: bool) -> AppResult<SeedSummary>;
}
