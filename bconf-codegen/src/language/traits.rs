//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use bconf_core::FieldType;
use eyre::Result;

/// Trait for language-specific code generators.
///
/// A generator owns one frozen configuration and renders it as exactly one
/// source file.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java", "kotlin")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java", "kt")
    fn file_extension(&self) -> &'static str;

    /// Render the generated file without writing to disk.
    ///
    /// Fails if any name in the configuration is not a valid identifier.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Write the generated file into `output_dir`, then remove stale
    /// generated files left there by earlier runs.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Remove stale generated files from `output_dir`, keeping the current one.
    fn clean(&self, output_dir: &Path) -> Result<CleanResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// The file that was written
    pub written: PathBuf,
    /// Stale generated files that were removed
    pub removed: Vec<PathBuf>,
}

/// Result of cleaning stale files
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Generated files that were deleted
    pub removed: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: PathBuf,
    /// File content, header included
    pub content: String,
}

/// Trait for mapping field types to language-specific type names.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a field type to the type name used in a declaration.
    fn map_field_type(&self, ty: FieldType) -> &'static str;
}
