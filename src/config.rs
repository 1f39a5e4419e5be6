//! Codegen Configuration
//!
//! Optional `codegen.toml`. Every field has a default matching the game's
//! current layout, so an absent file is the common case.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::constants::{DEFAULT_TICKS_PER_SECOND, DEFAULT_TIME_TOLERANCE};
use crate::crafting::EmissionPolicy;
use crate::error::LoadError;

fn default_ticks_per_second() -> u32 {
    DEFAULT_TICKS_PER_SECOND
}

fn default_time_tolerance() -> f64 {
    DEFAULT_TIME_TOLERANCE
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Recipe Sets
// ============================================================================

/// One recipe set in `recipes.toml` and how it is emitted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetConfig {
    /// Top-level table name in `recipes.toml`
    pub key: String,
    /// Name of the generated `&[Recipe]` constant
    pub const_name: String,
    #[serde(default = "default_true")]
    pub emit_table: bool,
    #[serde(default)]
    pub emit_slot_layout: bool,
    /// Ordinal lookup function, only emitted with the slot layout
    #[serde(default = "default_layout_fn")]
    pub layout_fn: String,
    /// Result-kind to ordinal lookup function, only emitted with the slot layout
    #[serde(default = "default_index_fn")]
    pub index_fn: String,
}

fn default_layout_fn() -> String {
    "crafting_recipe_inventory".to_string()
}

fn default_index_fn() -> String {
    "crafting_recipe_index".to_string()
}

impl SetConfig {
    pub fn new(key: &str, const_name: &str, policy: EmissionPolicy) -> Self {
        Self {
            key: key.to_string(),
            const_name: const_name.to_string(),
            emit_table: policy.emit_table,
            emit_slot_layout: policy.emit_slot_layout,
            layout_fn: default_layout_fn(),
            index_fn: default_index_fn(),
        }
    }

    pub fn policy(&self) -> EmissionPolicy {
        EmissionPolicy {
            emit_table: self.emit_table,
            emit_slot_layout: self.emit_slot_layout,
        }
    }
}

fn default_sets() -> Vec<SetConfig> {
    vec![
        SetConfig::new("furnace", "FURNACE_RECIPES", EmissionPolicy::TABLE_ONLY),
        SetConfig::new("recipes", "RECIPES", EmissionPolicy::FULL),
    ]
}

// ============================================================================
// Imports
// ============================================================================

/// Paths of the runtime types the generated file refers to
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    pub items: String,
    pub recipe: String,
    pub slots: String,
    pub ticks: String,
    /// Only imported when a structure kind appears in the output
    pub structure_kind: String,
    /// Only imported when a voxel kind appears in the output
    pub voxel: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            items: "crate::items::{Item, ItemKind}".to_string(),
            recipe: "super::Recipe".to_string(),
            slots: "crate::structures::inventory::{Filter, SlotKind, SlotMeta}".to_string(),
            ticks: "crate::constants::TICKS_PER_SECOND".to_string(),
            structure_kind: "crate::structures::strct::StructureKind".to_string(),
            voxel: "crate::voxel_world::voxel::Voxel".to_string(),
        }
    }
}

impl ImportConfig {
    /// Name the tick constant is referred to by in time expressions
    pub fn ticks_constant(&self) -> &str {
        self.ticks.rsplit("::").next().unwrap_or(&self.ticks)
    }
}

// ============================================================================
// Top-level Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: u32,
    #[serde(default = "default_time_tolerance")]
    pub time_tolerance: f64,
    #[serde(default = "default_sets")]
    pub sets: Vec<SetConfig>,
    #[serde(default)]
    pub imports: ImportConfig,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            time_tolerance: DEFAULT_TIME_TOLERANCE,
            sets: default_sets(),
            imports: ImportConfig::default(),
        }
    }
}

impl CodegenConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, LoadError> {
        let config: Self = toml::from_str(content).map_err(|e| LoadError::parse(origin, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, LoadError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let config = Self::from_toml_str(&content, path)?;
        info!(
            "Loaded codegen config from {:?}: {} ticks/s, {} recipe sets",
            path,
            config.ticks_per_second,
            config.sets.len()
        );
        Ok(config)
    }

    /// Reject settings that would produce a broken or ambiguous file
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.ticks_per_second == 0 {
            return Err(LoadError::Config("ticks_per_second must be positive".into()));
        }
        if !self.time_tolerance.is_finite() || self.time_tolerance < 0.0 {
            return Err(LoadError::Config(format!(
                "time_tolerance must be a non-negative number, got {}",
                self.time_tolerance
            )));
        }

        let mut keys = HashSet::new();
        let mut names = HashSet::new();
        for set in &self.sets {
            if !keys.insert(set.key.as_str()) {
                return Err(LoadError::Config(format!(
                    "recipe set '{}' is listed twice",
                    set.key
                )));
            }
            // Layout ordinals index into the set's own table
            if set.emit_slot_layout && !set.emit_table {
                return Err(LoadError::Config(format!(
                    "recipe set '{}' emits a slot layout without its recipe table",
                    set.key
                )));
            }

            let mut emitted = Vec::new();
            if set.emit_table {
                emitted.push(set.const_name.as_str());
            }
            if set.emit_slot_layout {
                emitted.push(set.layout_fn.as_str());
                emitted.push(set.index_fn.as_str());
            }
            for name in emitted {
                if !names.insert(name) {
                    return Err(LoadError::Config(format!(
                        "generated item '{}' is declared twice",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodegenConfig::from_toml_str("", Path::new("codegen.toml")).unwrap();
        assert_eq!(config, CodegenConfig::default());
        assert_eq!(config.ticks_per_second, 60);
        assert_eq!(config.sets.len(), 2);
        assert_eq!(config.sets[0].policy(), EmissionPolicy::TABLE_ONLY);
        assert_eq!(config.sets[1].policy(), EmissionPolicy::FULL);
        assert_eq!(config.imports.ticks_constant(), "TICKS_PER_SECOND");
    }

    #[test]
    fn test_override() {
        let toml_str = r#"
            ticks_per_second = 20

            [[sets]]
            key = "assembler"
            const_name = "ASSEMBLER_RECIPES"
            emit_slot_layout = true

            [imports]
            ticks = "crate::time::TPS"
        "#;

        let config = CodegenConfig::from_toml_str(toml_str, Path::new("codegen.toml")).unwrap();
        assert_eq!(config.ticks_per_second, 20);
        assert_eq!(config.sets.len(), 1);
        assert!(config.sets[0].emit_table);
        assert_eq!(config.sets[0].layout_fn, "crafting_recipe_inventory");
        assert_eq!(config.imports.ticks_constant(), "TPS");
        assert_eq!(config.imports.recipe, "super::Recipe");
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let err = CodegenConfig::from_toml_str("ticks_per_second = 0", Path::new("codegen.toml"));
        assert!(matches!(err, Err(LoadError::Config(_))));
    }

    #[test]
    fn test_rejects_clashing_names() {
        let toml_str = r#"
            [[sets]]
            key = "a"
            const_name = "RECIPES"
            emit_slot_layout = true

            [[sets]]
            key = "b"
            const_name = "OTHER"
            emit_slot_layout = true
        "#;
        let err = CodegenConfig::from_toml_str(toml_str, Path::new("codegen.toml"));
        assert!(matches!(
            err,
            Err(LoadError::Config(msg)) if msg.contains("crafting_recipe_inventory")
        ));
    }

    #[test]
    fn test_rejects_layout_without_table() {
        let toml_str = r#"
            [[sets]]
            key = "recipes"
            const_name = "RECIPES"
            emit_table = false
            emit_slot_layout = true
        "#;
        let err = CodegenConfig::from_toml_str(toml_str, Path::new("codegen.toml"));
        assert!(matches!(
            err,
            Err(LoadError::Config(msg)) if msg.contains("without its recipe table")
        ));

        let mut config = CodegenConfig::default();
        config.sets[1].emit_table = false;
        assert!(matches!(config.validate(), Err(LoadError::Config(_))));
    }

    #[test]
    fn test_slot_headroom_is_not_configurable() {
        // Slot capacity is always twice the authored quantity
        let err = CodegenConfig::from_toml_str("slot_headroom = 3", Path::new("codegen.toml"));
        assert!(matches!(err, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_missing_path_uses_defaults() {
        assert_eq!(CodegenConfig::load(None).unwrap(), CodegenConfig::default());
    }
}
