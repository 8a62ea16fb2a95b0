//! Lint trait for configuration validation.

use bconf_ir::GenerationConfig;
use bconf_manifest::Manifest;

use crate::pipeline::Diagnostic;

/// A lint that checks the resolved configuration for issues.
///
/// The manifest is passed alongside so diagnostics can point at where a
/// value came from.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the configuration and add any diagnostics.
    fn check(&self, manifest: &Manifest, config: &GenerationConfig, diagnostics: &mut Vec<Diagnostic>);
}
