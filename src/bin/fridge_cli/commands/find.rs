// ABOUTME: Recipe finding command for fridge-cli
// ABOUTME: Selects the given ingredients and prints the recipe cards the matcher returns
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use anyhow::{anyhow, Result};
use fridge_food_server::client::{render, ClientError, Finder};

/// Find recipes for `ingredients` and print them
pub async fn run(finder: &mut Finder, ingredients: &[String]) -> Result<()> {
    // Without a catalog the names are sent as typed
    if finder.load_catalog().await.is_err() {
        if let Some(banner) = finder.session().banner() {
            eprintln!("{banner}");
        }
    }

    let session = finder.session_mut();
    for name in ingredients {
        session.select(name);
    }
    println!("{}", render::render_selection(session));

    let outcome = finder.submit().await.map(<[_]>::len);
    match outcome {
        Ok(_) => {
            print!("{}", render::render_results(finder.session().results()));
            Ok(())
        }
        Err(ClientError::Server { status, message }) => {
            Err(anyhow!("Server returned {status}: {message}"))
        }
        Err(e) => {
            let banner = finder
                .session()
                .banner()
                .map_or_else(|| e.to_string(), str::to_owned);
            Err(anyhow!(banner))
        }
    }
}
