//! Table Emission
//!
//! Rendering compiled recipe sets to Rust source and writing the result.

pub mod output;
pub mod rust;

pub use output::{is_up_to_date, write_atomic};
pub use rust::RustEmitter;
