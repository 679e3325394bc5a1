// ABOUTME: Recipe matcher route returning recipes fully covered by the posted ingredients
// ABOUTME: Maps malformed bodies to 400 and oversized ones to 413 before the matcher runs
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use fridge_core::constants::routes;
use fridge_core::errors::{AppError, AppResult, ErrorCode};
use fridge_core::models::RecipeSearchRequest;
use tracing::info;

use crate::resources::ServerResources;
use crate::services::matcher;

/// Recipe matcher routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the matcher routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::RECIPES, post(Self::handle_find_recipes))
            .with_state(resources)
    }

    /// POST /recipes - recipes whose whole ingredient list was posted
    async fn handle_find_recipes(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<RecipeSearchRequest>, JsonRejection>,
    ) -> AppResult<impl IntoResponse> {
        let Json(request) = payload.map_err(reject_body)?;

        let recipes = matcher::find_recipes(&resources.database, &request).await?;
        info!(matched = recipes.len(), "Recipes matched");
        Ok(Json(recipes))
    }
}

/// Oversized bodies keep their 413; every other rejection is a bad request
fn reject_body(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::new(ErrorCode::PayloadTooLarge, rejection.body_text())
    } else {
        AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
    }
}
