//! State carried through the pipeline phases.

use std::path::{Path, PathBuf};

use bconf_ir::{Defaults, GenerationConfig};
use bconf_manifest::Manifest;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::host::BuildPlan;

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being processed.
    pub manifest: Manifest,
    /// Directory the manifest's relative paths are resolved against.
    pub project_dir: PathBuf,
    pub defaults: Defaults,
    /// Set by the configure phase.
    pub plan: Option<BuildPlan>,
    /// Set by the resolve phase.
    pub config: Option<GenerationConfig>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            project_dir: project_dir.into(),
            defaults: Defaults::default(),
            plan: None,
            config: None,
            diagnostics: Vec::new(),
        }
    }

    /// Replace the defaults used by every phase.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The frozen configuration.
    pub fn config(&self) -> Result<&GenerationConfig> {
        self.config
            .as_ref()
            .ok_or_else(|| eyre!("configuration not resolved - did the resolve phase run?"))
    }

    /// The build plan.
    pub fn plan(&self) -> Result<&BuildPlan> {
        self.plan
            .as_ref()
            .ok_or_else(|| eyre!("build plan not set - did the configure phase run?"))
    }

    /// Build directory, relative to the project directory.
    pub fn build_dir(&self) -> &Path {
        Path::new(&self.manifest.project.build_dir)
    }

    /// Absolute output directory of the generation step.
    pub fn output_dir(&self) -> Result<PathBuf> {
        let plan = self.plan()?;
        let dir = plan
            .output_dir(&self.defaults)
            .ok_or_else(|| eyre!("build plan has no '{}' task", self.defaults.task_name))?;
        Ok(self.project_dir.join(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(Manifest::default(), "/project");
        assert!(ctx.plan.is_none());
        assert!(ctx.config().is_err());
        assert!(ctx.output_dir().is_err());
        assert_eq!(ctx.build_dir(), Path::new("build"));
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(Manifest::default(), ".");
        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("test", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("test", "test info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
    }
}
