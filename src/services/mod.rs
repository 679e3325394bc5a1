// ABOUTME: Domain service layer for catalog and recipe matching logic
// ABOUTME: Keeps route handlers thin and the matching rules reusable from tests and benches
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Domain service layer
//!
//! Business rules live here, independent of HTTP. Every service function is
//! generic over [`crate::database_plugins::DatabaseProvider`].

/// Catalog grouping
pub mod catalog;

/// Exact-cover recipe matching
pub mod matcher;

pub use catalog::load_catalog;
pub use matcher::find_recipes;
