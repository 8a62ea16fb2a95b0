//! Core utilities and types for the bconf build-config generator.
//!
//! This crate provides fundamental types and utilities used across
//! the bconf crates.

mod file;
mod types;
mod utils;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult, is_generated};
// Fundamental types
pub use types::FieldType;
// String utilities
pub use utils::{is_upper_snake_case, package_path, to_upper_snake_case};
