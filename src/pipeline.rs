//! Generation Pass
//!
//! Ties the stages together: every configured set is compiled from the
//! recipe book and the results are rendered into a single source file.
//! Any error aborts the pass before anything is emitted.

use std::path::Path;

use tracing::warn;

use crate::config::CodegenConfig;
use crate::crafting::{CompiledSet, RecipeCompiler};
use crate::data::{ItemNamespace, RecipeBook};
use crate::emit::RustEmitter;
use crate::error::LoadError;

/// Compile every set named in `config`, in config order
pub fn compile_book(
    book: &RecipeBook,
    namespace: &ItemNamespace,
    config: &CodegenConfig,
) -> Result<Vec<CompiledSet>, LoadError> {
    config.validate()?;

    for key in book.keys() {
        if !config.sets.iter().any(|s| s.key == key) {
            warn!("Recipe set '{}' is not configured for emission, skipping", key);
        }
    }

    let compiler = RecipeCompiler::new(namespace, config);
    let mut compiled = Vec::with_capacity(config.sets.len());
    for set in &config.sets {
        let defs = match book.get(&set.key) {
            Some(defs) => defs,
            None => {
                warn!("Recipe set '{}' is missing, emitting it empty", set.key);
                &[]
            }
        };
        compiled.push(compiler.compile_set(set, defs)?);
    }

    Ok(compiled)
}

/// Compile already-loaded inputs to Rust source
pub fn generate_source(
    book: &RecipeBook,
    namespace: &ItemNamespace,
    config: &CodegenConfig,
) -> Result<String, LoadError> {
    let compiled = compile_book(book, namespace, config)?;
    Ok(RustEmitter::new(&config.imports).emit(&compiled))
}

/// Load `items.toml` and `recipes.toml` from `data_dir` and compile them
pub fn generate(data_dir: &Path, config: &CodegenConfig) -> Result<String, LoadError> {
    let namespace = ItemNamespace::load_from_directory(data_dir)?;
    let book = RecipeBook::load_from_directory(data_dir)?;
    generate_source(&book, &namespace, config)
}
