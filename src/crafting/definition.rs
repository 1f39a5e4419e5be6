//! Crafting Recipe Definitions
//!
//! Authored recipe data as it comes out of TOML (Raw*) and the
//! defaults-applied definition handed to the compiler.

use serde::Deserialize;

// ============================================================================
// Raw TOML Structures
// ============================================================================

fn default_count() -> i64 {
    1
}

/// Raw requirement entry from TOML.
///
/// Either the compact pair form `["IronPlate", 2]` or a table
/// `{ item = "IronPlate", count = 2 }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRequirement {
    Pair(String, i64),
    Table {
        item: String,
        #[serde(default = "default_count")]
        count: i64,
    },
}

/// Raw recipe definition from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRecipeDefinition {
    #[serde(default)]
    pub requirements: Vec<RawRequirement>,
    #[serde(default = "default_count")]
    pub amount: i64,
    /// Production time in seconds
    pub time: f64,
}

// ============================================================================
// Resolved Structures
// ============================================================================

/// A recipe as authored, before any validation.
///
/// Quantities stay signed so non-positive values reach the normalizer and
/// fail there with a proper diagnostic instead of a parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDefinition {
    pub name: String,
    pub requirements: Vec<(String, i64)>,
    pub amount: i64,
    pub time: f64,
}

impl RecipeDefinition {
    pub fn new(name: &str, requirements: &[(&str, i64)], amount: i64, time: f64) -> Self {
        Self {
            name: name.to_string(),
            requirements: requirements
                .iter()
                .map(|(item, count)| (item.to_string(), *count))
                .collect(),
            amount,
            time,
        }
    }

    /// Create a RecipeDefinition from raw TOML data
    pub fn from_raw(name: &str, raw: &RawRecipeDefinition) -> Self {
        Self {
            name: name.trim().to_string(),
            requirements: raw
                .requirements
                .iter()
                .map(|r| match r {
                    RawRequirement::Pair(item, count) => (item.clone(), *count),
                    RawRequirement::Table { item, count } => (item.clone(), *count),
                })
                .collect(),
            amount: raw.amount,
            time: raw.time,
        }
    }
}
