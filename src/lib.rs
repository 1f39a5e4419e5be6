//! Recipe Codegen
//!
//! Compiles the game's authored crafting recipes into a static Rust table:
//! recipe constants with tick-quantized craft times, plus the slot layout an
//! assembler needs for each recipe.

pub mod config;
pub mod constants;
pub mod crafting;
pub mod data;
pub mod emit;
pub mod error;
pub mod item;
pub mod pipeline;

pub use config::CodegenConfig;
pub use error::{CompileError, LoadError};
pub use item::ItemKind;
pub use pipeline::{compile_book, generate, generate_source};
