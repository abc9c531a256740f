//! The read-only concept catalog: loading, lookup, and the display-entry
//! round trip consumed by a selection dropdown.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::concept::{Category, Concept};
use crate::errors::CatalogError;

/// One concept entry as stored in the catalog JSON; the category comes from
/// the enclosing map key.
#[derive(Debug, Deserialize)]
struct ConceptRecord {
    name: String,
    #[serde(default)]
    equation: String,
    #[serde(default)]
    visual: String,
}

/// Raw catalog schema: category key → concept records. `BTreeMap` keeps
/// category order deterministic regardless of JSON key order.
type RawCatalog = BTreeMap<String, Vec<ConceptRecord>>;

/// An immutable collection of named concepts grouped by category.
///
/// Loaded once; every accessor takes `&self`, so sharing across threads
/// after load needs no locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    concepts: Vec<Concept>,
}

impl Catalog {
    /// A catalog with no concepts. Lookups miss and the entry list is
    /// empty, but nothing fails.
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// The concept set embedded in the crate, mirroring the visualization
    /// catalog the application ships.
    pub fn builtin() -> Self {
        // The embedded resource is validated by test; a parse failure here
        // would be a packaging bug, and an empty catalog is the documented
        // degradation.
        Catalog::from_json_str(include_str!("../concepts/visualization_concepts.json"))
            .unwrap_or_else(|_| Catalog::empty())
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let mut concepts = Vec::new();
        for (key, records) in raw {
            let category = Category::from_key(&key);
            for record in records {
                concepts.push(Concept::new(
                    record.name,
                    category.clone(),
                    record.equation,
                    record.visual,
                ));
            }
        }
        Ok(Catalog { concepts })
    }

    /// Load a catalog from a JSON file, distinguishing a missing resource
    /// from an unreadable or corrupt one.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
            _ => CatalogError::Unreadable(path.to_path_buf(), e),
        })?;
        Catalog::from_json_str(&text)
    }

    /// Load from `path`, degrading to the builtin catalog (with a warning)
    /// when the file is missing or unusable. The core keeps operating
    /// either way.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        match Catalog::from_path(path.as_ref()) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!(
                    "falling back to builtin concept catalog: {} ({})",
                    path.as_ref().display(),
                    err
                );
                Catalog::builtin()
            },
        }
    }

    /// All concepts, in catalog order.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Find a concept by exact name across all categories. Names are
    /// assumed unique; on a duplicate, the first in catalog order wins.
    pub fn lookup(&self, name: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.name == name)
    }

    /// All concepts in one category, in catalog order.
    pub fn by_category(&self, category: &Category) -> Vec<&Concept> {
        self.concepts.iter().filter(|c| &c.category == category).collect()
    }

    /// Dropdown entries `"{category} - {name}"` (display-spaced category),
    /// sorted lexicographically.
    pub fn display_entries(&self) -> Vec<String> {
        let mut entries: Vec<String> =
            self.concepts.iter().map(Concept::display_entry).collect();
        entries.sort();
        entries
    }

    /// Inverse of [`display_entries`](Catalog::display_entries): resolve a
    /// selection back to its concept by splitting on the first `" - "`.
    /// Malformed selections and unknown names return `None`.
    pub fn parse_selection(&self, selection: &str) -> Option<&Concept> {
        let (_category, name) = selection.split_once(" - ")?;
        self.lookup(name)
    }
}
