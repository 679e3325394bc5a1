// ABOUTME: Core data models for the recipe finder
// ABOUTME: Re-exports the ingredient catalog and recipe matching types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! Types exchanged between the store, the HTTP API and the client.
//!
//! - `Ingredient`: one catalog row (name plus category)
//! - `Catalog`: ingredients grouped by category, deterministically sorted
//! - `Recipe`: a recipe card as returned by the matcher
//! - `RecipeSearchRequest`: the matcher request body

mod catalog;
mod recipe;

pub use catalog::{Catalog, Ingredient};
pub use recipe::{normalize_ingredient_name, Recipe, RecipeSearchRequest};
