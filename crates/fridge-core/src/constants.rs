// ABOUTME: Application constants grouped by domain
// ABOUTME: Route paths, user-facing messages, default settings and seed conventions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identity used in logs and health responses
pub mod service_names {
    /// Recipe service binary and tracing target
    pub const FRIDGE_FOOD_SERVER: &str = "fridge-food-server";
    /// Terminal client
    pub const FRIDGE_CLI: &str = "fridge-cli";
}

/// HTTP route paths
pub mod routes {
    /// Prefix the original web client uses for every API call
    pub const API_PREFIX: &str = "/api";
    /// Ingredient catalog
    pub const INGREDIENTS: &str = "/ingredients";
    /// Recipe matcher
    pub const RECIPES: &str = "/recipes";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe (touches the store)
    pub const READY: &str = "/ready";
}

/// Messages returned to callers or shown in the client
pub mod messages {
    /// Body of the root route
    pub const WELCOME: &str = "Welcome to the My Fridge Food API!";
    /// Matcher called without any usable ingredient names
    pub const NO_INGREDIENTS_PROVIDED: &str = "No ingredients provided";
    /// Generic body for every 5xx response
    pub const SERVER_ERROR: &str = "Server Error";
    /// Client banner for an empty submit
    pub const SELECT_AT_LEAST_ONE: &str = "Please select at least one ingredient";
    /// Client banner for a failed catalog load
    pub const CATALOG_FETCH_FAILED: &str = "Failed to fetch ingredients.";
    /// Client banner for a catalog payload that is not a category map
    pub const CATALOG_INVALID_FORMAT: &str = "Invalid data format received from the server.";
    /// Client banner for a failed matcher call
    pub const RECIPES_FETCH_FAILED: &str = "Failed to fetch recipes.";
    /// Client banner while a matcher call is still in flight
    pub const REQUEST_PENDING: &str = "Still finding recipes, please wait";
    /// Empty-state text after a search that matched nothing
    pub const NO_RECIPES_FOUND: &str =
        "No recipes found with all selected ingredients. Try selecting different ingredients or fewer ingredients.";
}

/// Default values for configuration
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// HTTP port of the recipe service
    pub const HTTP_PORT: u16 = 5000;
    /// SQLite file used when no database is configured
    pub const DATABASE_URL: &str = "sqlite:./data/fridge.db";
    /// Connection pool size
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// PostgreSQL database name
    pub const DB_NAME: &str = "my-fridge-food";
    /// PostgreSQL user
    pub const DB_USER: &str = "postgres";
    /// PostgreSQL port
    pub const DB_PORT: u16 = 5432;
    /// CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Base URL the client talks to
    pub const SERVER_URL: &str = "http://localhost:5000";
    /// Largest accepted request body
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
    /// CORS preflight cache lifetime
    pub const CORS_MAX_AGE_SECS: u64 = 60 * 60;
}

/// Seed data conventions
pub mod seed {
    /// Category receiving every ingredient no keyword matched
    pub const FALLBACK_CATEGORY: &str = "Other";
}
