// ABOUTME: Ingredient catalog service grouping stored ingredients by category
// ABOUTME: Produces the sorted category map served by the ingredients endpoint
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use fridge_core::errors::AppResult;
use fridge_core::models::Catalog;
use tracing::debug;

use crate::database_plugins::DatabaseProvider;

/// Load every categorized ingredient grouped by category
///
/// # Errors
///
/// Returns an error if the store query fails
pub async fn load_catalog<DB: DatabaseProvider>(database: &DB) -> AppResult<Catalog> {
    let rows = database.list_ingredients().await?;
    let catalog = Catalog::from_ingredients(rows);
    debug!(
        categories = catalog.category_count(),
        ingredients = catalog.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}
