//! Trick catalog: an arena of immutable profiles indexed by id.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::error::{CoachError, Result};

use super::trick::TrickProfile;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Static catalog of trick profiles.
///
/// Tricks cross-reference each other by id, so the catalog keeps a flat
/// arena plus an id-to-index map instead of live references. Loaded once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TrickCatalog {
    tricks: Vec<TrickProfile>,
    by_id: HashMap<String, usize>,
}

impl TrickCatalog {
    /// Build a catalog from profiles, rejecting duplicate ids.
    ///
    /// Dangling prerequisite/similar/family references are tolerated (they
    /// contribute nothing to metrics) but logged, since they usually point
    /// at a typo in the catalog data.
    pub fn from_tricks(tricks: Vec<TrickProfile>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(tricks.len());
        for (index, trick) in tricks.iter().enumerate() {
            if trick.id.is_empty() {
                return Err(CoachError::Catalog(format!(
                    "trick at index {index} has an empty id"
                )));
            }
            if by_id.insert(trick.id.clone(), index).is_some() {
                return Err(CoachError::Catalog(format!(
                    "duplicate trick id: {}",
                    trick.id
                )));
            }
        }

        let catalog = Self { tricks, by_id };
        catalog.warn_dangling_references();
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of trick profiles.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tricks: Vec<TrickProfile> = serde_json::from_str(json)?;
        Self::from_tricks(tricks)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn get(&self, trick_id: &str) -> Option<&TrickProfile> {
        self.by_id.get(trick_id).map(|&index| &self.tricks[index])
    }

    #[must_use]
    pub fn contains(&self, trick_id: &str) -> bool {
        self.by_id.contains_key(trick_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrickProfile> {
        self.tricks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tricks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }

    /// Tricks carrying a given family tag.
    pub fn family_members<'a>(
        &'a self,
        family: &'a str,
    ) -> impl Iterator<Item = &'a TrickProfile> {
        self.tricks
            .iter()
            .filter(move |trick| trick.families.iter().any(|tag| tag == family))
    }

    fn warn_dangling_references(&self) {
        for trick in &self.tricks {
            for reference in trick.prerequisites.iter().chain(&trick.similar) {
                if !self.by_id.contains_key(reference) {
                    warn!(
                        trick = %trick.id,
                        reference = %reference,
                        "catalog references an unknown trick id"
                    );
                }
            }
        }
    }
}
