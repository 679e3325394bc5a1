// ABOUTME: Recipe API server binary
// ABOUTME: Loads configuration, connects the store and serves the catalog and matcher
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Usage:
//! ```bash
//! # Serve with settings from the environment (or .env)
//! fridge-food-server
//!
//! # Override port and database
//! fridge-food-server --http-port 8080 --database-url sqlite:./data/fridge.db
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fridge_food_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::DatabaseProvider,
    logging,
    resources::ServerResources,
    server,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fridge-food-server")]
#[command(about = "My Fridge Food - find recipes you can cook with what you have")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url);
    }
    config.validate()?;

    info!("Starting My Fridge Food API");
    info!("{}", config.summary());

    let resources = ServerResources::connect(config).await?;
    info!(
        "Database initialized successfully: {}",
        resources.database.backend_info()
    );
    match resources.database.recipe_count().await {
        Ok(0) => warn!("No recipes stored yet; run seed-recipes to load the catalog"),
        Ok(count) => info!("{count} recipes available"),
        Err(e) => warn!(error = %e, "Could not count recipes"),
    }

    server::run(Arc::new(resources)).await
}
