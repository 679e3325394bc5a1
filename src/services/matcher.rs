// ABOUTME: Recipe matcher service returning recipes fully covered by a selection
// ABOUTME: Validates the request, resolves names to ids, then runs the exact-cover query
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Recipe Matching
//!
//! A recipe matches when every ingredient it requires is in the selection.
//! Extra selected ingredients never disqualify a recipe; a single missing
//! one always does. Matching takes two store round trips at most: name
//! resolution, then the cover query.

use fridge_core::constants::messages;
use fridge_core::errors::{AppError, AppResult};
use fridge_core::models::{Recipe, RecipeSearchRequest};
use tracing::debug;

use crate::database_plugins::DatabaseProvider;

/// Recipes whose full ingredient set is within the requested names
///
/// Unknown and blank names are ignored. If none of the names is known the
/// result is empty and no recipe query is issued.
///
/// # Errors
///
/// Returns `MissingRequiredField` when `ingredients` is absent or an empty
/// list, or a store error if either query fails
pub async fn find_recipes<DB: DatabaseProvider>(
    database: &DB,
    request: &RecipeSearchRequest,
) -> AppResult<Vec<Recipe>> {
    if request.is_empty() {
        return Err(AppError::missing_field(messages::NO_INGREDIENTS_PROVIDED));
    }

    let names = request.normalized_names();
    if names.is_empty() {
        debug!("Only blank ingredient names were requested");
        return Ok(Vec::new());
    }

    let ingredient_ids = database.resolve_ingredient_ids(&names).await?;
    if ingredient_ids.is_empty() {
        debug!(requested = names.len(), "No requested ingredient is in the catalog");
        return Ok(Vec::new());
    }

    let recipes = database.find_recipes_covered_by(&ingredient_ids).await?;
    debug!(
        requested = names.len(),
        resolved = ingredient_ids.len(),
        matched = recipes.len(),
        "Recipe match complete"
    );
    Ok(recipes)
}
