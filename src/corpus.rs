//! In-memory corpus types.
//!
//! A corpus is loaded once by the caller (the binaries parse the JSON
//! content file) and passed in whole; the engine never performs I/O and
//! never mutates it.

/// One curated category of content. Scenarios and responses within a
/// category are the only pairs ever cross-tested against each other.
#[derive(Debug, Clone)]
pub struct Category {
    /// Stable identifier (the key in the content file).
    pub key: String,
    /// Display name.
    pub name: String,
    /// Scenario templates, in authored order.
    pub scenarios: Vec<String>,
    /// Response fragments, in authored order.
    pub responses: Vec<String>,
}

/// The full content corpus, categories in key order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub categories: Vec<Category>,
}

impl Corpus {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.key == key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
