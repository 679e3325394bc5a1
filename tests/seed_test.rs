// ABOUTME: Integration tests for seed file parsing and loading into the store
// ABOUTME: Checks the shipped seed data, stored ingredient counts and reset behavior
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;
use std::path::Path;

use fridge_food_server::database_plugins::{factory::Database, DatabaseProvider};
use fridge_food_server::errors::ErrorCode;
use fridge_food_server::models::Catalog;
use fridge_food_server::seed::{SeedFile, SeedPlan};
use fridge_food_server::services::load_catalog;
use tempfile::NamedTempFile;

/// Recipes whose stored count differs from their link rows
async fn recipes_with_wrong_count(database: &Database) -> i64 {
    let Database::SQLite(sqlite) = database else {
        panic!("tests run on SQLite");
    };
    sqlx::query_scalar(
        r"
        SELECT COUNT(*) FROM recipes r
        WHERE r.ingredient_count <> (
            SELECT COUNT(*) FROM recipe_ingredients ri WHERE ri.recipe_id = r.id
        )
        ",
    )
    .fetch_one(sqlite.pool())
    .await
    .unwrap()
}

#[test]
fn test_from_path_reads_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(common::SEED_FIXTURE.as_bytes()).unwrap();

    let seed = SeedFile::from_path(file.path()).unwrap();

    assert_eq!(seed.categories.len(), 3);
    assert_eq!(seed.recipes.len(), 5);
}

#[test]
fn test_missing_file_is_not_found() {
    let error = SeedFile::from_path(Path::new("/nonexistent/seed.yaml")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_malformed_yaml_is_invalid_format() {
    let error = SeedFile::from_yaml_str("recipes: [name: [").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_duplicate_category_is_rejected() {
    let seed = SeedFile::from_yaml_str(
        r"
categories:
  - name: Dairy
  - name: dairy
",
    )
    .unwrap();

    let error = SeedPlan::build(&seed).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_fixture_load_summary() {
    let database = common::create_test_database().await.unwrap();
    let plan = common::fixture_plan().unwrap();

    let summary = database.load_seed(&plan, false).await.unwrap();

    // Dairy, Grains, Vegetables plus the fallback category
    assert_eq!(summary.categories, 4);
    assert_eq!(summary.ingredients, 6);
    assert_eq!(summary.recipes, 5);
    assert_eq!(summary.links, plan.link_count());
    assert_eq!(summary.links, 11);
    assert_eq!(recipes_with_wrong_count(&database).await, 0);
}

#[tokio::test]
async fn test_shipped_seed_data_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/seed_recipes.yaml");
    let seed = SeedFile::from_path(&path).unwrap();
    let plan = SeedPlan::build(&seed).unwrap();
    let database = common::create_test_database().await.unwrap();

    let summary = database.load_seed(&plan, false).await.unwrap();

    assert_eq!(summary.recipes, seed.recipes.len());
    assert_eq!(database.recipe_count().await.unwrap(), 12);
    assert_eq!(recipes_with_wrong_count(&database).await, 0);

    let catalog: Catalog = load_catalog(&database).await.unwrap();
    assert_eq!(catalog.len(), plan.ingredients.len());
    assert_eq!(catalog.category_of("Egg"), Some("Dairy"));
}

#[tokio::test]
async fn test_reload_without_reset_keeps_catalog_rows() {
    let database = common::create_seeded_database().await.unwrap();
    let plan = common::fixture_plan().unwrap();

    let summary = database.load_seed(&plan, false).await.unwrap();

    assert_eq!(summary.categories, 0);
    assert_eq!(summary.ingredients, 0);
    assert_eq!(load_catalog(&database).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_reset_reload_replaces_everything() {
    let database = common::create_seeded_database().await.unwrap();
    let plan = common::fixture_plan().unwrap();

    let summary = database.load_seed(&plan, true).await.unwrap();

    assert_eq!(summary.categories, 4);
    assert_eq!(summary.recipes, 5);
    assert_eq!(database.recipe_count().await.unwrap(), 5);
    assert_eq!(recipes_with_wrong_count(&database).await, 0);
}
