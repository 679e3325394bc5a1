// ABOUTME: fridge-cli - terminal client for the My Fridge Food recipe API
// ABOUTME: Browses the ingredient catalog and finds recipes for a set of ingredients
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Show the catalog grouped by category
//! fridge-cli ingredients
//!
//! # Search the catalog
//! fridge-cli ingredients --search chil
//!
//! # Find recipes cookable with these ingredients
//! fridge-cli find egg milk "green chilli"
//!
//! # Talk to another deployment
//! fridge-cli --server-url https://fridge.example.com/api find egg
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fridge_food_server::{
    client::{ApiClient, Finder},
    constants::{defaults, service_names},
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "fridge-cli",
    about = "My Fridge Food CLI",
    long_about = "Browse the ingredient catalog and find the recipes you can cook with what is in your fridge."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe API base URL
    #[arg(long, global = true, env = "FRIDGE_SERVER_URL", default_value = defaults::SERVER_URL)]
    server_url: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List the ingredient catalog
    Ingredients {
        /// Only show ingredients containing this text
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Find recipes whose every ingredient is in the list
    Find {
        /// Ingredient names
        ingredients: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(service_names::FRIDGE_CLI, cli.verbose).init()?;

    let client = ApiClient::new(&cli.server_url)?;
    let mut finder = Finder::new(client);

    match cli.command {
        Command::Ingredients { search } => commands::ingredients::run(&mut finder, search).await,
        Command::Find { ingredients } => commands::find::run(&mut finder, &ingredients).await,
    }
}
