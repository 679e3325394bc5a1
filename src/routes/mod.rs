// ABOUTME: Route module organization for the recipe API HTTP endpoints
// ABOUTME: One module per domain, each exposing a routes() constructor with thin handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Route module for the recipe API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Ingredient catalog routes
pub mod ingredients;
/// Recipe matcher routes
pub mod recipes;

pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;
