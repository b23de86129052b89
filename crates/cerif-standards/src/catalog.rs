//! Classification catalog: concept to `(scheme, class)` lookup.

use std::collections::BTreeMap;
use std::path::Path;

use cerif_model::{Classification, ConfigurationError, Concept};

use crate::builtin::BUILTIN;
use crate::error::StandardsError;
use crate::overrides::{Override, OverrideError, parse_overrides};

/// Immutable concept → classification table.
///
/// Built once at startup and shared by reference for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<Concept, Classification>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog covering every [`Concept`].
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|(concept, scheme, class)| (*concept, Classification::new(*scheme, *class))),
        )
    }

    /// Catalog built from an explicit, possibly partial, entry list.
    pub fn from_entries(entries: impl IntoIterator<Item = (Concept, Classification)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Built-in catalog with the overrides of `path` applied, if given.
    pub fn load(path: Option<&Path>) -> Result<Self, StandardsError> {
        let catalog = Self::builtin();
        match path {
            Some(path) => catalog.with_overrides_from_path(path),
            None => Ok(catalog),
        }
    }

    pub fn with_overrides_from_path(mut self, path: &Path) -> Result<Self, StandardsError> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let overrides = parse_overrides(&text).map_err(|err| match err {
            OverrideError::Toml(source) => StandardsError::Toml {
                path: path.to_path_buf(),
                source,
            },
            OverrideError::Configuration(source) => StandardsError::Configuration {
                path: path.to_path_buf(),
                source,
            },
        })?;
        self.apply(&overrides)
            .map_err(|source| StandardsError::Configuration {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self)
    }

    /// Replace entries. A partial override needs an existing entry to
    /// complete it.
    pub fn apply(&mut self, overrides: &[Override]) -> Result<(), ConfigurationError> {
        for item in overrides {
            let current = self.entries.get(&item.concept);
            let scheme = match (&item.scheme, current) {
                (Some(scheme), _) => scheme.clone(),
                (None, Some(existing)) => existing.scheme.clone(),
                (None, None) => return Err(ConfigurationError::Unclassified(item.concept)),
            };
            let class = match (&item.class, current) {
                (Some(class), _) => class.clone(),
                (None, Some(existing)) => existing.class.clone(),
                (None, None) => return Err(ConfigurationError::Unclassified(item.concept)),
            };
            self.entries
                .insert(item.concept, Classification::new(scheme, class));
        }
        Ok(())
    }

    /// Resolve a concept to its classification.
    pub fn classify(&self, concept: Concept) -> Result<Classification, ConfigurationError> {
        self.get(concept)
            .cloned()
            .ok_or(ConfigurationError::Unclassified(concept))
    }

    pub fn get(&self, concept: Concept) -> Option<&Classification> {
        self.entries.get(&concept)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Concept, &Classification)> {
        self.entries.iter().map(|(concept, class)| (*concept, class))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concepts without an entry.
    pub fn missing(&self) -> Vec<Concept> {
        Concept::ALL
            .iter()
            .copied()
            .filter(|concept| !self.entries.contains_key(concept))
            .collect()
    }
}
