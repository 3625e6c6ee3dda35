//! Category storage shared by the parser and the interpolation engine.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;

use super::Category;

/// Categories for one language, keyed by case-sensitive name.
///
/// Insertion is first-write-wins: a second category with the same name is
/// dropped, whether it comes from the same catalog or a later one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: BTreeMap<String, Category>,
}

impl CategoryTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Insert a category unless the name is already taken.
    ///
    /// Returns `true` if the category was added.
    pub fn insert(&mut self, name: impl Into<String>, category: Category) -> bool {
        match self.categories.entry(name.into()) {
            Entry::Vacant(slot) => {
                slot.insert(category);
                true
            }
            Entry::Occupied(existing) => {
                tracing::trace!(name = %existing.key(), "duplicate category ignored");
                false
            }
        }
    }

    /// Drop every category.
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// `(name, category)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories
            .iter()
            .map(|(name, category)| (name.as_str(), category))
    }
}
