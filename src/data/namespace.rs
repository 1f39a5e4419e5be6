//! Item Namespace
//!
//! The set of item, structure and voxel kinds the game defines. Recipe
//! names and ingredients are resolved against it before compilation.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::constants::ITEMS_FILE;
use crate::error::LoadError;
use crate::item::{parse_identifier, ItemKind, KindTag};

/// Raw namespace from TOML
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNamespace {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub structures: Vec<String>,
    #[serde(default)]
    pub voxels: Vec<String>,
}

/// Known item kinds, grouped by tag
#[derive(Debug, Clone, Default)]
pub struct ItemNamespace {
    items: HashSet<String>,
    structures: HashSet<String>,
    voxels: HashSet<String>,
}

impl ItemNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawNamespace) -> Self {
        let mut namespace = Self::new();
        for name in &raw.items {
            namespace.insert(KindTag::Plain, name);
        }
        for name in &raw.structures {
            namespace.insert(KindTag::Structure, name);
        }
        for name in &raw.voxels {
            namespace.insert(KindTag::Voxel, name);
        }
        namespace
    }

    /// Parse a namespace from TOML text; `origin` is only used in errors
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, LoadError> {
        let raw: RawNamespace =
            toml::from_str(content).map_err(|e| LoadError::parse(origin, e))?;
        Ok(Self::from_raw(&raw))
    }

    /// Load the namespace from `items.toml` in the data directory
    pub fn load_from_directory(data_dir: &Path) -> Result<Self, LoadError> {
        let path = data_dir.join(ITEMS_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| LoadError::io(&path, e))?;
        let namespace = Self::from_toml_str(&content, &path)?;

        if namespace.is_empty() {
            warn!("Item namespace {:?} is empty, every recipe will fail to resolve", path);
        }
        info!(
            "Loaded item namespace: {} items, {} structures, {} voxels",
            namespace.items.len(),
            namespace.structures.len(),
            namespace.voxels.len()
        );

        Ok(namespace)
    }

    /// Register a bare variant name under `tag`
    pub fn insert(&mut self, tag: KindTag, name: &str) -> bool {
        let set = match tag {
            KindTag::Plain => &mut self.items,
            KindTag::Structure => &mut self.structures,
            KindTag::Voxel => &mut self.voxels,
        };
        let inserted = set.insert(name.to_string());
        if !inserted {
            warn!("Duplicate {:?} kind '{}' in namespace", tag, name);
        }
        inserted
    }

    /// Resolve an authored identifier to a known kind
    pub fn resolve(&self, text: &str) -> Option<ItemKind> {
        let (tag, name) = parse_identifier(text)?;
        self.contains(tag, name).then(|| ItemKind::new(tag, name))
    }

    /// Check if a bare variant name is known under `tag`
    pub fn contains(&self, tag: KindTag, name: &str) -> bool {
        match tag {
            KindTag::Plain => self.items.contains(name),
            KindTag::Structure => self.structures.contains(name),
            KindTag::Voxel => self.voxels.contains(name),
        }
    }

    /// Get the total number of known kinds
    pub fn len(&self) -> usize {
        self.items.len() + self.structures.len() + self.voxels.len()
    }

    /// Check if the namespace is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
