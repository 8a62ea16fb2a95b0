//! Check operation - manifest validation.

use std::path::Path;

use bconf_codegen::pipeline::{CompilationContext, Severity};
use bconf_manifest::Manifest;
use eyre::Result;

use crate::{language::LanguageSupport, reports::CheckReport};

/// Execute the check operation.
///
/// Runs the lifecycle over the manifest and collects its diagnostics.
/// Nothing is written.
pub fn check(manifest: &Manifest, config_path: &Path, project_dir: &Path) -> Result<CheckReport> {
    let lang = LanguageSupport::get(manifest.buildconfig.language);
    let mut ctx = CompilationContext::new(manifest.clone(), project_dir);

    // A failing phase has already recorded why; anything else is unexpected.
    if let Err(err) = lang.pipeline().run_context(&mut ctx) {
        if !ctx.has_errors() {
            return Err(err);
        }
        tracing::debug!(error = %err, "pipeline stopped");
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        qualified_name: ctx.config.as_ref().map(|c| c.qualified_name()),
        field_count: ctx.config.as_ref().map_or(0, |c| c.fields().len()),
        errors,
        warnings,
        infos,
    })
}
