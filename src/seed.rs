// ABOUTME: Seed data parsing and planning for the ingredient catalog and recipes
// ABOUTME: Title-cases ingredient names, assigns categories by keyword, and fixes ingredient counts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Seed Data
//!
//! The store is populated offline from a YAML seed file. Parsing produces a
//! [`SeedFile`]; [`SeedPlan::build`] turns it into exactly the rows that get
//! written, so a database backend only has to insert them.
//!
//! ```yaml
//! categories:
//!   - name: Dairy
//!     keywords: [Milk, Paneer, Ghee]
//! recipes:
//!   - name: Masala Chai
//!     cuisine: Indian
//!     total_time_in_mins: 10
//!     ingredients: "milk, tea leaves, cardamom"
//! ```

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use fridge_core::constants::seed::FALLBACK_CATEGORY;
use fridge_core::errors::{AppError, AppResult, ErrorCode};
use fridge_core::models::Ingredient;
use serde::{Deserialize, Serialize};

/// A category declaration with the keywords that pull ingredients into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Ingredient names as a YAML list or as one comma-separated string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientList {
    List(Vec<String>),
    Joined(String),
}

impl IngredientList {
    fn raw_names(&self) -> Vec<&str> {
        match self {
            Self::List(names) => names.iter().map(String::as_str).collect(),
            Self::Joined(joined) => joined.split(',').collect(),
        }
    }
}

impl Default for IngredientList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// A recipe as written in the seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSpec {
    pub name: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub total_time_in_mins: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub ingredients: IngredientList,
}

/// Parsed seed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<CategorySpec>,
    #[serde(default)]
    pub recipes: Vec<RecipeSpec>,
}

impl SeedFile {
    /// Parse seed YAML
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the document does not match the seed layout
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Invalid seed file: {e}")).with_source(e)
        })
    }

    /// Read and parse a seed file from disk
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file cannot be read, `InvalidFormat`
    /// if it cannot be parsed
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            AppError::not_found(format!("Seed file {}", path.display())).with_source(e)
        })?;
        Self::from_yaml_str(&yaml)
    }
}

/// A recipe ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRecipe {
    pub name: String,
    pub cuisine: Option<String>,
    pub total_time_in_mins: Option<i32>,
    pub url: Option<String>,
    pub instructions: Option<String>,
    /// Sorted, duplicate-free catalog names
    pub ingredients: Vec<String>,
}

impl PlannedRecipe {
    /// Value stored in `recipes.ingredient_count`
    #[must_use]
    pub fn ingredient_count(&self) -> i32 {
        i32::try_from(self.ingredients.len()).unwrap_or(i32::MAX)
    }
}

/// Rows to write, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedPlan {
    /// Category names in declaration order, fallback last
    pub categories: Vec<String>,
    /// Every ingredient used by a recipe, sorted by name
    pub ingredients: Vec<Ingredient>,
    pub recipes: Vec<PlannedRecipe>,
}

impl SeedPlan {
    /// Resolve a seed file into rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank or duplicate category names and for
    /// recipes without a name
    pub fn build(file: &SeedFile) -> AppResult<Self> {
        let categories = declared_categories(&file.categories)?;

        let mut recipes = Vec::with_capacity(file.recipes.len());
        let mut used: BTreeSet<String> = BTreeSet::new();
        for entry in &file.recipes {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(AppError::invalid_input("Seed recipe without a name"));
            }
            let ingredients: BTreeSet<String> = entry
                .ingredients
                .raw_names()
                .into_iter()
                .map(title_case)
                .filter(|ingredient| !ingredient.is_empty())
                .collect();
            used.extend(ingredients.iter().cloned());
            recipes.push(PlannedRecipe {
                name: name.to_owned(),
                cuisine: non_blank(entry.cuisine.as_deref()),
                total_time_in_mins: entry.total_time_in_mins,
                url: non_blank(entry.url.as_deref()),
                instructions: non_blank(entry.instructions.as_deref()),
                ingredients: ingredients.into_iter().collect(),
            });
        }

        let ingredients = used
            .into_iter()
            .map(|name| {
                let category = categorize(&name, &file.categories);
                Ingredient::new(name, category)
            })
            .collect();

        Ok(Self {
            categories,
            ingredients,
            recipes,
        })
    }

    /// Number of recipe-ingredient links the plan writes
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.recipes.iter().map(|recipe| recipe.ingredients.len()).sum()
    }

    /// Ingredient count per category, for the seeder's report
    #[must_use]
    pub fn ingredients_per_category(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for ingredient in &self.ingredients {
            *counts.entry(ingredient.category.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// What a seeding run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub categories: usize,
    pub ingredients: usize,
    pub recipes: usize,
    pub links: usize,
}

/// Title-case an ingredient name the way the catalog stores it
///
/// Letters following a letter are lower-cased; any other letter is
/// upper-cased. Surrounding whitespace is removed.
#[must_use]
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_is_letter = false;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}

/// Category for an ingredient
///
/// The first declared category owning a keyword contained in the name wins,
/// compared case-insensitively; unmatched names go to the fallback category.
#[must_use]
pub fn categorize<'a>(ingredient: &str, categories: &'a [CategorySpec]) -> &'a str {
    let lowered = ingredient.to_lowercase();
    categories
        .iter()
        .find(|category| {
            category.keywords.iter().any(|keyword| {
                let keyword = keyword.trim().to_lowercase();
                !keyword.is_empty() && lowered.contains(&keyword)
            })
        })
        .map_or(FALLBACK_CATEGORY, |category| category.name.as_str())
}

fn declared_categories(entries: &[CategorySpec]) -> AppResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(entries.len() + 1);
    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Seed category without a name"));
        }
        if name != entry.name {
            return Err(AppError::invalid_input(format!(
                "Seed category '{}' has surrounding whitespace",
                entry.name
            )));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(AppError::invalid_input(format!(
                "Seed category '{name}' is declared twice"
            )));
        }
        names.push(name.to_owned());
    }
    if !seen.contains(&FALLBACK_CATEGORY.to_lowercase()) {
        names.push(FALLBACK_CATEGORY.to_owned());
    }
    Ok(names)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
