//! Crafting Recipe Compiler
//!
//! Recipe definitions, normalization into records, time quantization and
//! slot layouts for crafting stations.

pub mod compiler;
pub mod definition;
pub mod record;
pub mod slots;
pub mod time;

pub use compiler::{CompiledSet, EmissionPolicy, RecipeCompiler};
pub use definition::{RawRecipeDefinition, RecipeDefinition};
pub use record::{ItemStack, RecipeRecord};
pub use slots::{Filter, SlotKind, SlotLayout, SlotLayoutTable, SlotMeta};
pub use time::{QuantizedTime, TimeQuantizer};
