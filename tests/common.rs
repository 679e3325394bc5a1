// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, the seed fixture, routers and quiet logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fridge_food_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use anyhow::Result;
use axum::Router;
use fridge_food_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::{factory::Database, DatabaseProvider},
    resources::ServerResources,
    seed::{SeedFile, SeedPlan},
    server,
};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Seed fixture shared by the route, client and bench tests
///
/// Recipe ids follow declaration order: Omelette is 1, Tomato Rice is 5.
pub const SEED_FIXTURE: &str = r"
categories:
  - name: Dairy
    keywords: [Egg, Milk]
  - name: Grains
    keywords: [Rice, Flour]
  - name: Vegetables
    keywords: [Tomato, Onion]
recipes:
  - name: Omelette
    cuisine: French
    total_time_in_mins: 10
    url: https://example.com/omelette
    ingredients: [egg]
  - name: Egg Fried Rice
    cuisine: Chinese
    total_time_in_mins: 25
    ingredients: [egg, rice]
  - name: Scrambled Eggs
    total_time_in_mins: 8
    ingredients: [egg, milk]
  - name: Pancakes
    cuisine: American
    total_time_in_mins: 20
    ingredients: [egg, milk, flour]
  - name: Tomato Rice
    cuisine: Indian
    total_time_in_mins: 30
    ingredients: 'tomato, onion, rice'
";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        // Unit tests in the same binary may have installed one already
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Empty in-memory database with the schema created
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:", 1).await?;
    database.migrate().await?;
    Ok(database)
}

/// In-memory database without any schema, so every query fails
pub async fn create_broken_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:", 1).await?)
}

/// Parsed plan of [`SEED_FIXTURE`]
pub fn fixture_plan() -> Result<SeedPlan> {
    let file = SeedFile::from_yaml_str(SEED_FIXTURE)?;
    Ok(SeedPlan::build(&file)?)
}

/// In-memory database loaded with [`SEED_FIXTURE`]
pub async fn create_seeded_database() -> Result<Database> {
    let database = create_test_database().await?;
    database.load_seed(&fixture_plan()?, false).await?;
    Ok(database)
}

/// Server resources around `database` with default configuration
pub fn create_test_resources(database: Database) -> Arc<ServerResources> {
    let mut config = ServerConfig::default();
    config.database.url = DatabaseUrl::Memory;
    Arc::new(ServerResources::new(database, config))
}

/// Fully layered router over the seeded fixture
pub async fn create_test_router() -> Result<Router> {
    let database = create_seeded_database().await?;
    Ok(server::build_router(create_test_resources(database)))
}

/// Serve `database` on an ephemeral local port; returns the API base URL
pub async fn spawn_test_server(database: Database) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address: SocketAddr = listener.local_addr()?;
    let resources = create_test_resources(database);
    tokio::spawn(async move {
        let _ = server::serve(listener, resources).await;
    });
    Ok(format!("http://{address}/api"))
}

/// Names of `recipes`, in order
pub fn recipe_names(recipes: &[fridge_food_server::models::Recipe]) -> Vec<&str> {
    recipes.iter().map(|recipe| recipe.name.as_str()).collect()
}
