// ABOUTME: Recipe card model and the recipe matcher request body
// ABOUTME: Normalizes selected ingredient names before they reach the store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};

/// A recipe as returned by the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store identifier
    pub id: i64,
    /// Recipe title
    pub name: String,
    /// Cuisine label, if known
    pub cuisine: Option<String>,
    /// Total preparation and cooking time
    pub total_time_in_mins: Option<i32>,
    /// Size of the recipe's required ingredient set
    pub ingredient_count: i32,
    /// Link to the full recipe
    pub url: Option<String>,
    /// Cooking instructions
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Body of `POST /recipes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSearchRequest {
    /// Ingredient names the user has on hand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

impl RecipeSearchRequest {
    /// Request for the given ingredient names
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: Some(ingredients.into_iter().map(Into::into).collect()),
        }
    }

    /// Whether `ingredients` is absent or an empty list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.as_deref().unwrap_or_default().is_empty()
    }

    /// Lower-cased, trimmed, de-duplicated names in request order
    ///
    /// Blank entries are dropped.
    #[must_use]
    pub fn normalized_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.ingredients.iter().flatten() {
            let normalized = normalize_ingredient_name(name);
            if !normalized.is_empty() && !names.contains(&normalized) {
                names.push(normalized);
            }
        }
        names
    }
}

/// Matching key for an ingredient name
#[must_use]
pub fn normalize_ingredient_name(name: &str) -> String {
    name.trim().to_lowercase()
}
