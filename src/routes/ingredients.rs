// ABOUTME: Ingredient catalog route serving every ingredient grouped by category
// ABOUTME: Thin handler delegating to the catalog service
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use fridge_core::constants::routes;
use fridge_core::errors::AppResult;

use crate::resources::ServerResources;
use crate::services::catalog;

/// Ingredient catalog routes
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create the catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::INGREDIENTS, get(Self::handle_list_ingredients))
            .with_state(resources)
    }

    /// GET /ingredients - category to sorted ingredient names
    async fn handle_list_ingredients(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let catalog = catalog::load_catalog(&resources.database).await?;
        Ok(Json(catalog))
    }
}
