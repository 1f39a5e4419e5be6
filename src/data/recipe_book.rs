//! Recipe Book
//!
//! Loads `recipes.toml`, keeping every set and every recipe in document
//! order. Order is load-bearing: the runtime addresses slot layouts by a
//! recipe's position in its set.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tracing::{info, warn};

use crate::constants::RECIPES_FILE;
use crate::crafting::definition::{RawRecipeDefinition, RecipeDefinition};
use crate::error::LoadError;

/// A TOML table read as a list of entries, in the order they were written
#[derive(Debug, Clone)]
struct Ordered<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Ordered<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
            type Value = Ordered<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Every recipe set in a recipe file
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    sets: Vec<(String, Vec<RecipeDefinition>)>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a recipe file from TOML text; `origin` is only used in errors
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, LoadError> {
        let table: Ordered<Ordered<RawRecipeDefinition>> =
            toml::from_str(content).map_err(|e| LoadError::parse(origin, e))?;

        let mut book = Self::new();
        for (key, recipes) in table.0 {
            let defs = recipes
                .0
                .iter()
                .map(|(name, raw)| RecipeDefinition::from_raw(name, raw))
                .collect();
            book.insert(&key, defs);
        }
        Ok(book)
    }

    /// Load `recipes.toml` from the data directory
    pub fn load_from_directory(data_dir: &Path) -> Result<Self, LoadError> {
        let path = data_dir.join(RECIPES_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| LoadError::io(&path, e))?;
        let book = Self::from_toml_str(&content, &path)?;

        for (key, defs) in &book.sets {
            info!("Loaded recipe set '{}' from {:?}: {} recipes", key, path, defs.len());
        }

        Ok(book)
    }

    /// Add or replace a set
    pub fn insert(&mut self, key: &str, defs: Vec<RecipeDefinition>) {
        match self.sets.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => {
                warn!("Duplicate recipe set '{}', overwriting", key);
                *existing = defs;
            }
            None => self.sets.push((key.to_string(), defs)),
        }
    }

    /// Get a set's definitions in authored order
    pub fn get(&self, key: &str) -> Option<&[RecipeDefinition]> {
        self.sets
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, defs)| defs.as_slice())
    }

    /// Get all set keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
