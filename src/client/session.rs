// ABOUTME: Recipe finder session state: catalog, selection, search term and results
// ABOUTME: Pure state machine with no I/O, driven by a front end or by Finder
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use fridge_core::constants::messages;
use fridge_core::models::{Catalog, Recipe, RecipeSearchRequest};

use super::{ClientError, ClientResult};

/// Progress of the catalog download
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Not requested yet
    #[default]
    Idle,
    /// Download in flight
    Loading,
    /// Catalog available for search
    Ready,
    /// Download failed; the catalog is empty
    Failed,
}

/// What the result area shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing searched yet, or cleared
    #[default]
    Idle,
    /// A matcher request is in flight
    Loading,
    /// Recipes cookable with the selection
    Found(Vec<Recipe>),
    /// The matcher answered, but nothing is cookable with the selection
    NoneFound,
}

impl ResultsView {
    /// Recipes currently shown
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            Self::Found(recipes) => recipes,
            Self::Idle | Self::Loading | Self::NoneFound => &[],
        }
    }
}

/// State of one recipe finder session
///
/// The selection keeps insertion order and never holds the same name twice.
/// Nothing here outlives the session.
#[derive(Debug, Clone, Default)]
pub struct FinderSession {
    catalog_status: CatalogStatus,
    catalog: Catalog,
    selection: Vec<String>,
    search_term: String,
    results: ResultsView,
    banner: Option<String>,
    pending: bool,
}

impl FinderSession {
    /// Fresh session with no catalog and nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress of the catalog download
    #[must_use]
    pub const fn catalog_status(&self) -> CatalogStatus {
        self.catalog_status
    }

    /// Ingredients grouped by category
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Selected names in the order they were picked
    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Current search box contents
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// What the result area shows
    #[must_use]
    pub const fn results(&self) -> &ResultsView {
        &self.results
    }

    /// Error or validation message to show, if any
    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Whether a matcher request is in flight
    ///
    /// Only an answer or a failure ends a request; clearing does not.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    // ================================
    // Catalog
    // ================================

    /// Mark the catalog download as started
    pub fn begin_catalog_load(&mut self) {
        self.catalog_status = CatalogStatus::Loading;
    }

    /// Store a downloaded catalog
    pub fn catalog_loaded(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.catalog_status = CatalogStatus::Ready;
    }

    /// Record a failed catalog load
    ///
    /// The session keeps working with an empty catalog; names can still be
    /// selected directly.
    pub fn catalog_failed(&mut self, error: &ClientError) {
        self.catalog = Catalog::default();
        self.catalog_status = CatalogStatus::Failed;
        let banner = match error {
            ClientError::Decode(_) => messages::CATALOG_INVALID_FORMAT,
            _ => messages::CATALOG_FETCH_FAILED,
        };
        self.banner = Some(banner.to_owned());
    }

    // ================================
    // Search
    // ================================

    /// Replace the search term
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Catalog names containing the search term, ignoring case
    ///
    /// A blank term matches nothing.
    #[must_use]
    pub fn search_results(&self) -> Vec<&str> {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.catalog
            .ingredient_names()
            .filter(|name| name.to_lowercase().contains(&term))
            .collect()
    }

    // ================================
    // Selection
    // ================================

    /// Whether `name` is selected, ignoring case and padding
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.selection
            .iter()
            .position(|selected| selected.to_lowercase() == wanted)
    }

    /// Add `name` unless already selected; always clears the search term
    ///
    /// Names are stored with their catalog spelling when the catalog knows
    /// them. Returns whether the selection changed.
    pub fn select(&mut self, name: &str) -> bool {
        self.search_term.clear();
        let trimmed = name.trim();
        if trimmed.is_empty() || self.is_selected(trimmed) {
            return false;
        }
        let stored = self.catalog.canonical_name(trimmed).unwrap_or(trimmed);
        self.selection.push(stored.to_owned());
        true
    }

    /// Remove `name` from the selection; returns whether it was selected
    pub fn deselect(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.selection.remove(index);
                true
            }
            None => false,
        }
    }

    /// Checkbox behavior: select when absent, deselect when present
    ///
    /// Returns whether `name` is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.deselect(name) {
            false
        } else {
            self.select(name)
        }
    }

    /// Drop the selection and the results
    pub fn clear(&mut self) {
        self.selection.clear();
        self.results = ResultsView::Idle;
    }

    // ================================
    // Submit
    // ================================

    /// Start a matcher request for the current selection
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` when nothing is selected and `RequestPending`
    /// while a previous request has not finished. Neither reaches the network.
    pub fn begin_submit(&mut self) -> ClientResult<RecipeSearchRequest> {
        if self.is_pending() {
            return Err(ClientError::RequestPending);
        }
        if self.selection.is_empty() {
            self.banner = Some(messages::SELECT_AT_LEAST_ONE.to_owned());
            return Err(ClientError::EmptySelection);
        }
        self.banner = None;
        self.pending = true;
        self.results = ResultsView::Loading;
        Ok(RecipeSearchRequest::new(self.selection.iter().cloned()))
    }

    /// Finish the pending request with the matcher's answer
    ///
    /// An answer for a selection cleared in the meantime is dropped.
    pub fn recipes_loaded(&mut self, recipes: Vec<Recipe>) {
        self.pending = false;
        self.results = if self.selection.is_empty() {
            ResultsView::Idle
        } else if recipes.is_empty() {
            ResultsView::NoneFound
        } else {
            ResultsView::Found(recipes)
        };
    }

    /// Finish the pending request with a failure banner
    pub fn recipes_failed(&mut self) {
        self.pending = false;
        self.banner = Some(messages::RECIPES_FETCH_FAILED.to_owned());
        self.results = ResultsView::Idle;
    }
}
