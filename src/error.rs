//! Error Types
//!
//! `CompileError` covers bad recipe data; every variant aborts the whole
//! generation pass. `LoadError` adds the file and configuration failures
//! the surrounding tooling can run into.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("recipe '{recipe}': unknown item kind '{name}'")]
    UnknownItemKind { recipe: String, name: String },

    #[error("recipe '{recipe}': invalid quantity {quantity} for '{item}'")]
    InvalidQuantity {
        recipe: String,
        item: String,
        quantity: i64,
    },

    #[error("recipe '{recipe}': production time {seconds}s must be a positive, finite number")]
    InvalidTime { recipe: String, seconds: f64 },

    #[error(
        "recipe '{recipe}': {seconds}s cannot be expressed exactly at {ticks_per_second} ticks/s \
         (nearest candidate is {ticks} ticks)"
    )]
    AmbiguousTimeQuantization {
        recipe: String,
        seconds: f64,
        ticks: u32,
        ticks_per_second: u32,
    },

    #[error("slot layout index {index} is out of range ({len} recipes compiled)")]
    SlotIndexOutOfRange { index: usize, len: usize },

    #[error("recipe set '{set}': '{name}' is authored more than once")]
    DuplicateRecipe { set: String, name: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        LoadError::Parse {
            path: path.into(),
            source,
        }
    }
}
