//! Recipe Compiler
//!
//! One pipeline shared by every recipe set: normalize and quantize each
//! definition, then build whatever the set's emission policy asks for.

use std::collections::HashSet;

use tracing::info;

use super::definition::RecipeDefinition;
use super::record::RecipeRecord;
use super::slots::SlotLayoutTable;
use super::time::TimeQuantizer;
use crate::config::{CodegenConfig, SetConfig};
use crate::data::ItemNamespace;
use crate::error::CompileError;

/// What to produce for a compiled set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionPolicy {
    pub emit_table: bool,
    pub emit_slot_layout: bool,
}

impl EmissionPolicy {
    /// Furnace recipes: the stations use a fixed slot scheme
    pub const TABLE_ONLY: Self = Self {
        emit_table: true,
        emit_slot_layout: false,
    };

    /// Assembler recipes: table plus per-recipe slot layouts
    pub const FULL: Self = Self {
        emit_table: true,
        emit_slot_layout: true,
    };
}

/// A recipe set after compilation, records in authored order
#[derive(Debug, Clone)]
pub struct CompiledSet {
    pub config: SetConfig,
    pub records: Vec<RecipeRecord>,
    /// Present when the policy asks for slot layouts
    pub slot_layouts: Option<SlotLayoutTable>,
}

impl CompiledSet {
    pub fn policy(&self) -> EmissionPolicy {
        self.config.policy()
    }
}

pub struct RecipeCompiler<'a> {
    namespace: &'a ItemNamespace,
    quantizer: TimeQuantizer,
}

impl<'a> RecipeCompiler<'a> {
    pub fn new(namespace: &'a ItemNamespace, config: &CodegenConfig) -> Self {
        Self {
            namespace,
            quantizer: TimeQuantizer::new(config.ticks_per_second, config.time_tolerance),
        }
    }

    pub fn ticks_per_second(&self) -> u32 {
        self.quantizer.ticks_per_second()
    }

    /// Normalize and quantize a single definition
    pub fn compile_recipe(&self, def: &RecipeDefinition) -> Result<RecipeRecord, CompileError> {
        RecipeRecord::normalize(def, self.namespace, &self.quantizer)
    }

    /// Compile a whole set; the first failing recipe aborts the set.
    ///
    /// Two recipes with the same result are rejected because the slot layout
    /// is also looked up by result kind.
    pub fn compile_set(
        &self,
        set: &SetConfig,
        defs: &[RecipeDefinition],
    ) -> Result<CompiledSet, CompileError> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(defs.len());

        for def in defs {
            let record = self.compile_recipe(def)?;
            if !seen.insert(record.result.kind.clone()) {
                return Err(CompileError::DuplicateRecipe {
                    set: set.key.clone(),
                    name: record.result.kind.to_string(),
                });
            }
            records.push(record);
        }

        let slot_layouts = if set.emit_slot_layout {
            Some(SlotLayoutTable::from_records(&records)?)
        } else {
            None
        };

        match &slot_layouts {
            Some(layouts) => info!(
                "Compiled recipe set '{}': {} recipes with {} slot layouts",
                set.key,
                records.len(),
                layouts.len()
            ),
            None => info!("Compiled recipe set '{}': {} recipes", set.key, records.len()),
        }

        Ok(CompiledSet {
            config: set.clone(),
            records,
            slot_layouts,
        })
    }
}
