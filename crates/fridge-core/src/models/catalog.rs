// ABOUTME: Ingredient catalog model grouping ingredient names by category
// ABOUTME: Serializes as a plain JSON object of category to sorted ingredient names
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single catalog row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, unique across the catalog
    pub name: String,
    /// Category label used for grouping
    pub category: String,
}

impl Ingredient {
    /// Create a catalog row
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Ingredients grouped by category
///
/// Categories iterate in name order and every category's ingredient list is
/// sorted and free of duplicates, so two catalogs built from the same rows
/// are equal and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<String, Vec<String>>);

impl Catalog {
    /// Group catalog rows by category
    pub fn from_ingredients(rows: impl IntoIterator<Item = Ingredient>) -> Self {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in rows {
            grouped.entry(row.category).or_default().push(row.name);
        }
        for names in grouped.values_mut() {
            names.sort();
            names.dedup();
        }
        Self(grouped)
    }

    /// Iterate categories in name order with their ingredient names
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(category, names)| (category.as_str(), names.as_slice()))
    }

    /// Every ingredient name, category by category
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    /// Category holding `name`, compared case-insensitively
    #[must_use]
    pub fn category_of(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        self.0.iter().find_map(|(category, names)| {
            names
                .iter()
                .any(|candidate| candidate.to_lowercase() == wanted)
                .then_some(category.as_str())
        })
    }

    /// Catalog spelling of `name`, compared case-insensitively
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        self.ingredient_names()
            .find(|candidate| candidate.to_lowercase() == wanted)
    }

    /// Number of ingredients across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Whether the catalog lists no ingredient at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of categories
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_ingredients([
            Ingredient::new("Rice", "Grains"),
            Ingredient::new("Milk", "Dairy"),
            Ingredient::new("Egg", "Dairy"),
            Ingredient::new("Flour", "Grains"),
        ])
    }

    #[test]
    fn test_grouping_is_sorted() {
        let catalog = sample();
        let categories: Vec<_> = catalog.categories().collect();

        assert_eq!(categories[0].0, "Dairy");
        assert_eq!(categories[0].1, ["Egg", "Milk"]);
        assert_eq!(categories[1].0, "Grains");
        assert_eq!(categories[1].1, ["Flour", "Rice"]);
    }

    #[test]
    fn test_grouping_ignores_row_order() {
        let forward = sample();
        let reversed = Catalog::from_ingredients([
            Ingredient::new("Flour", "Grains"),
            Ingredient::new("Egg", "Dairy"),
            Ingredient::new("Milk", "Dairy"),
            Ingredient::new("Rice", "Grains"),
        ]);

        assert_eq!(forward, reversed);
        assert_eq!(
            serde_json::to_string(&forward).unwrap(),
            serde_json::to_string(&reversed).unwrap()
        );
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Dairy": ["Egg", "Milk"], "Grains": ["Flour", "Rice"] })
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = sample();
        assert_eq!(catalog.category_of("egg"), Some("Dairy"));
        assert_eq!(catalog.canonical_name(" RICE "), Some("Rice"));
        assert_eq!(catalog.category_of("saffron"), None);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.category_count(), 2);
    }
}
