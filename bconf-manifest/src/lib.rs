// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Manifest parsing for the bconf build-config generator.
//!
//! Reads `buildconfig.toml`, checks every field declaration against its
//! declared type, and reports problems as [`miette`] diagnostics pointing at
//! the offending span.

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    BuildConfigSection, ExtensionError, FieldDecl, FieldError, Language, Manifest, ManifestFile,
    ProjectConfig, parse_manifest,
};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "buildconfig.toml";
