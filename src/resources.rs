// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds the database pool and the resolved server configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use fridge_core::errors::AppResult;

use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;

/// Long-lived resources shared across requests
///
/// Nothing in here is mutated after startup; the pool handles its own
/// synchronization.
#[derive(Clone)]
pub struct ServerResources {
    pub database: Database,
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle already-created resources
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
        }
    }

    /// Connect to the configured database, creating the schema when enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the migration fails
    pub async fn connect(config: ServerConfig) -> AppResult<Self> {
        let database = Database::new(
            &config.database.url.to_connection_string(),
            config.database.max_connections,
        )
        .await?;
        if config.database.auto_migrate {
            database.migrate().await?;
        }
        Ok(Self::new(database, config))
    }
}
