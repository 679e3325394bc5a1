// ABOUTME: Plain-text rendering of the catalog, search results and recipe cards
// ABOUTME: Used by the terminal client; returns strings so output stays testable
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::fmt::Write;

use fridge_core::constants::messages;
use fridge_core::models::Recipe;

use super::{FinderSession, ResultsView};

const SELECTED: &str = "[x]";
const UNSELECTED: &str = "[ ]";

/// Catalog grouped by category, marking selected ingredients
#[must_use]
pub fn render_catalog(session: &FinderSession) -> String {
    let mut out = String::new();
    for (category, names) in session.catalog().categories() {
        let _ = writeln!(out, "{category}");
        for name in names {
            let marker = if session.is_selected(name) {
                SELECTED
            } else {
                UNSELECTED
            };
            let _ = writeln!(out, "  {marker} {name}");
        }
    }
    out
}

/// Flat list of names matching the search term
#[must_use]
pub fn render_search_results(session: &FinderSession) -> String {
    let results = session.search_results();
    if results.is_empty() {
        return format!("No ingredient matches '{}'\n", session.search_term());
    }
    let mut out = String::new();
    for name in results {
        let marker = if session.is_selected(name) {
            SELECTED
        } else {
            UNSELECTED
        };
        let _ = writeln!(out, "{marker} {name}");
    }
    out
}

/// Selected ingredients on one line
#[must_use]
pub fn render_selection(session: &FinderSession) -> String {
    if session.selection().is_empty() {
        "Selected: (none)".to_owned()
    } else {
        format!("Selected: {}", session.selection().join(", "))
    }
}

/// One recipe card
#[must_use]
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.name);

    let mut facts = Vec::with_capacity(3);
    if let Some(cuisine) = &recipe.cuisine {
        facts.push(format!("Cuisine: {cuisine}"));
    }
    if let Some(minutes) = recipe.total_time_in_mins {
        facts.push(format!("Time: {minutes} mins"));
    }
    facts.push(format!("Ingredients: {}", recipe.ingredient_count));
    let _ = writeln!(out, "  {}", facts.join(" | "));

    if let Some(url) = &recipe.url {
        let _ = writeln!(out, "  {url}");
    }
    out
}

/// The result area for the session's current view
#[must_use]
pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Idle => String::new(),
        ResultsView::Loading => "Finding recipes...\n".to_owned(),
        ResultsView::NoneFound => format!("{}\n", messages::NO_RECIPES_FOUND),
        ResultsView::Found(recipes) => {
            let mut out = format!("Found {} recipe(s)\n\n", recipes.len());
            for recipe in recipes {
                out.push_str(&render_recipe(recipe));
                out.push('\n');
            }
            out
        }
    }
}
