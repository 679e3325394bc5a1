// ABOUTME: Main library entry point for the My Fridge Food recipe finder
// ABOUTME: Provides the recipe API server, the seeder and the terminal client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # My Fridge Food
//!
//! Find recipes you can cook with what is already in your fridge. The
//! service lists a catalog of ingredients grouped by category and, given a
//! selection, returns the recipes whose every required ingredient is in it.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers, mounted at `/` and under `/api`
//! - **Services**: catalog grouping and exact-cover matching
//! - **Database plugins**: SQLite (default) and PostgreSQL behind one trait
//! - **Seed**: YAML seed data planning for the `seed-recipes` binary
//! - **Client**: HTTP client and selection state machine for `fridge-cli`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fridge_food_server::config::environment::ServerConfig;
//! use fridge_food_server::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::connect(config).await?;
//!     fridge_food_server::server::run(Arc::new(resources)).await
//! }
//! ```

/// HTTP client and selection state for terminal front ends
pub mod client;

/// Configuration management
pub mod config;

/// Database backends
pub mod database_plugins;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Seed data planning
pub mod seed;

/// Router assembly and serving
pub mod server;

/// Business logic
pub mod services;

pub use fridge_core::{constants, errors, models};
