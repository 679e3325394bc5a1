// ABOUTME: Recipe and ingredient catalog seeding utility
// ABOUTME: Loads a YAML seed file, categorizes ingredients and writes everything in one transaction
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Recipe data seeder.
//!
//! Usage:
//! ```bash
//! # Seed from the bundled sample (uses DATABASE_URL from environment)
//! seed-recipes --file data/seed_recipes.yaml
//!
//! # Override database URL
//! seed-recipes --file data/seed_recipes.yaml --database-url sqlite:./data/fridge.db
//!
//! # Force re-seed (replaces existing data)
//! seed-recipes --file data/seed_recipes.yaml --force
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fridge_food_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::{factory::Database, DatabaseProvider},
    logging::LoggingConfig,
    seed::{SeedFile, SeedPlan},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "My Fridge Food Recipe Seeder",
    long_about = "Load ingredient categories and recipes from a YAML seed file into the recipe store"
)]
struct SeedArgs {
    /// Seed file (YAML)
    #[arg(long, short = 'f', default_value = "data/seed_recipes.yaml")]
    file: PathBuf,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if data already exists
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging_config = LoggingConfig::for_cli("seed-recipes", args.verbose);
    if !args.verbose {
        logging_config.level = "info".into();
    }
    logging_config.init()?;

    info!("=== My Fridge Food Recipe Seeder ===");

    let seed_file = SeedFile::from_path(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let plan = SeedPlan::build(&seed_file)?;
    info!(
        "Planned {} categories, {} ingredients, {} recipes",
        plan.categories.len(),
        plan.ingredients.len(),
        plan.recipes.len()
    );

    let config = ServerConfig::from_env()?;
    let database_url = args
        .database_url
        .map_or(config.database.url, |url| DatabaseUrl::parse_url(&url));

    info!("Connecting to database: {}", database_url);
    let database = Database::new(
        &database_url.to_connection_string(),
        config.database.max_connections,
    )
    .await?;
    database.migrate().await?;

    let existing = database.recipe_count().await?;
    if existing > 0 && !args.force {
        info!("Recipes already seeded ({existing} recipes). Use --force to re-seed.");
        return Ok(());
    }

    let summary = database.load_seed(&plan, args.force).await?;
    for (category, count) in plan.ingredients_per_category() {
        info!("  {category}: {count} ingredients");
    }
    info!(
        "Seeded {} categories, {} ingredients, {} recipes, {} links",
        summary.categories, summary.ingredients, summary.recipes, summary.links
    );

    Ok(())
}
