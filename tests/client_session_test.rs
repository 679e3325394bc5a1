// ABOUTME: Tests for the recipe finder session state machine and its text rendering
// ABOUTME: Exercises selection, search, submit guards and result views without any I/O
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fridge_food_server::client::{
    render, CatalogStatus, ClientError, FinderSession, ResultsView,
};
use fridge_food_server::constants::messages;
use fridge_food_server::models::{Catalog, Ingredient, Recipe};

fn catalog() -> Catalog {
    Catalog::from_ingredients([
        Ingredient::new("Egg", "Dairy"),
        Ingredient::new("Milk", "Dairy"),
        Ingredient::new("Rice", "Grains"),
        Ingredient::new("Red Chilli", "Spices"),
        Ingredient::new("Chilli Powder", "Spices"),
    ])
}

fn ready_session() -> FinderSession {
    let mut session = FinderSession::new();
    session.begin_catalog_load();
    session.catalog_loaded(catalog());
    session
}

fn recipe(id: i64, name: &str, ingredient_count: i32) -> Recipe {
    Recipe {
        id,
        name: name.to_owned(),
        cuisine: Some("Indian".to_owned()),
        total_time_in_mins: Some(15),
        ingredient_count,
        url: None,
        instructions: None,
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_new_session_is_idle() {
    let session = FinderSession::new();

    assert_eq!(session.catalog_status(), CatalogStatus::Idle);
    assert!(session.catalog().is_empty());
    assert!(session.selection().is_empty());
    assert_eq!(session.results(), &ResultsView::Idle);
    assert!(session.banner().is_none());
}

#[test]
fn test_catalog_load_progression() {
    let mut session = FinderSession::new();
    session.begin_catalog_load();
    assert_eq!(session.catalog_status(), CatalogStatus::Loading);

    session.catalog_loaded(catalog());
    assert_eq!(session.catalog_status(), CatalogStatus::Ready);
    assert_eq!(session.catalog().category_count(), 3);
}

#[test]
fn test_invalid_catalog_payload_banner() {
    let mut session = ready_session();
    let decode_error = serde_json::from_str::<Catalog>("[1, 2]").unwrap_err();

    session.catalog_failed(&ClientError::Decode(decode_error));

    assert_eq!(session.catalog_status(), CatalogStatus::Failed);
    assert!(session.catalog().is_empty());
    assert_eq!(session.banner(), Some(messages::CATALOG_INVALID_FORMAT));
}

#[test]
fn test_failed_catalog_still_allows_selection() {
    let mut session = FinderSession::new();
    session.catalog_failed(&ClientError::Server {
        status: 500,
        message: messages::SERVER_ERROR.to_owned(),
    });
    assert_eq!(session.banner(), Some(messages::CATALOG_FETCH_FAILED));

    assert!(session.select("  paneer "));
    assert_eq!(session.selection(), ["paneer"]);
    assert!(session.begin_submit().is_ok());
}

// ============================================================================
// Search and selection
// ============================================================================

#[test]
fn test_search_is_case_insensitive_substring() {
    let mut session = ready_session();
    session.set_search("CHILLI");

    assert_eq!(session.search_results(), vec!["Chilli Powder", "Red Chilli"]);
}

#[test]
fn test_selecting_from_search_clears_term() {
    let mut session = ready_session();
    session.set_search("ric");

    let first = session.search_results()[0].to_owned();
    assert!(session.select(&first));

    assert_eq!(session.search_term(), "");
    assert!(session.search_results().is_empty());
    assert!(session.is_selected("RICE"));
}

#[test]
fn test_selection_keeps_insertion_order_without_duplicates() {
    let mut session = ready_session();
    session.select("Rice");
    session.select("egg");
    session.select("Rice");
    session.select("");

    assert_eq!(session.selection(), ["Rice", "Egg"]);
}

#[test]
fn test_deselect_and_clear() {
    let mut session = ready_session();
    session.select("Egg");
    session.select("Milk");

    assert!(session.deselect("EGG"));
    assert!(!session.deselect("Egg"));
    assert_eq!(session.selection(), ["Milk"]);

    session.begin_submit().unwrap();
    session.recipes_loaded(vec![recipe(1, "Masala Chai", 1)]);
    session.clear();

    assert!(session.selection().is_empty());
    assert_eq!(session.results(), &ResultsView::Idle);
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_empty_submit_sets_banner_and_keeps_results() {
    let mut session = ready_session();

    let result = session.begin_submit();

    assert!(matches!(result, Err(ClientError::EmptySelection)));
    assert_eq!(session.banner(), Some(messages::SELECT_AT_LEAST_ONE));
    assert_eq!(session.results(), &ResultsView::Idle);
}

#[test]
fn test_submit_clears_banner_and_builds_request() {
    let mut session = ready_session();
    let _ = session.begin_submit();
    session.select("Milk");
    session.select("Egg");

    let request = session.begin_submit().unwrap();

    assert!(session.banner().is_none());
    assert!(session.is_pending());
    assert_eq!(session.results(), &ResultsView::Loading);
    assert_eq!(
        request.ingredients,
        Some(vec!["Milk".to_owned(), "Egg".to_owned()])
    );
}

#[test]
fn test_second_submit_while_pending_is_refused() {
    let mut session = ready_session();
    session.select("Egg");
    session.begin_submit().unwrap();

    assert!(matches!(
        session.begin_submit(),
        Err(ClientError::RequestPending)
    ));

    session.recipes_loaded(Vec::new());
    assert!(session.begin_submit().is_ok());
}

#[test]
fn test_result_views() {
    let mut session = ready_session();
    session.select("Egg");

    session.begin_submit().unwrap();
    session.recipes_loaded(vec![recipe(3, "Boiled Egg", 1)]);
    assert_eq!(session.results().recipes().len(), 1);

    session.begin_submit().unwrap();
    session.recipes_loaded(Vec::new());
    assert_eq!(session.results(), &ResultsView::NoneFound);
    assert!(session.results().recipes().is_empty());

    session.begin_submit().unwrap();
    session.recipes_failed();
    assert_eq!(session.results(), &ResultsView::Idle);
    assert_eq!(session.banner(), Some(messages::RECIPES_FETCH_FAILED));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_search_and_selection() {
    let mut session = ready_session();
    assert_eq!(render::render_selection(&session), "Selected: (none)");

    session.select("Red Chilli");
    session.set_search("chilli");

    assert_eq!(
        render::render_search_results(&session),
        "[ ] Chilli Powder\n[x] Red Chilli\n"
    );
    assert_eq!(render::render_selection(&session), "Selected: Red Chilli");

    session.set_search("saffron");
    assert_eq!(
        render::render_search_results(&session),
        "No ingredient matches 'saffron'\n"
    );
}

#[test]
fn test_render_found_results() {
    let view = ResultsView::Found(vec![recipe(1, "Masala Chai", 1), recipe(2, "Sweet Lassi", 2)]);

    let rendered = render::render_results(&view);

    assert!(rendered.starts_with("Found 2 recipe(s)\n\n"));
    assert!(rendered.contains("Masala Chai\n  Cuisine: Indian | Time: 15 mins | Ingredients: 1\n"));
    assert!(rendered.contains("Sweet Lassi"));
    assert_eq!(render::render_results(&ResultsView::Idle), "");
}
