//! Sources of the values written to the environment file
//!
//! The CLI always uses [`BuiltinValues`]. [`FileValues`] lets library callers
//! supply the same record from a TOML or YAML file instead.

pub mod loader;

pub use loader::{load_values, BuiltinValues, FileValues, ValueSource};
