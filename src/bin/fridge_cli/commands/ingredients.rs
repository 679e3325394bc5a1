// ABOUTME: Catalog listing command for fridge-cli
// ABOUTME: Prints the grouped catalog, or the flat search results for a term
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use anyhow::Result;
use fridge_food_server::client::{render, Finder};

/// Print the catalog or the ingredients matching `search`
pub async fn run(finder: &mut Finder, search: Option<String>) -> Result<()> {
    finder.load_catalog().await?;

    let session = finder.session_mut();
    match search {
        Some(term) => {
            session.set_search(term);
            print!("{}", render::render_search_results(session));
        }
        None => print!("{}", render::render_catalog(session)),
    }
    Ok(())
}
