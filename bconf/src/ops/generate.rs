//! Generate operation - the genBuildConfig task.

use std::path::Path;

use bconf_manifest::Manifest;
use eyre::{Context, Result};

use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the build directory is resolved against.
    pub project_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the lifecycle over the manifest, then renders the frozen
/// configuration into the task's output directory.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let lang = LanguageSupport::get(manifest.buildconfig.language);
    let ctx = lang
        .pipeline()
        .run(manifest.clone(), opts.project_dir)
        .wrap_err("pipeline failed")?;

    let warnings = ctx.warnings().map(ToString::to_string).collect();
    let config = ctx.config()?;
    let generator = lang.generator(&ctx)?;

    let result = if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path.display().to_string(),
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let output_dir = ctx.output_dir()?;
        let generated = generator
            .generate(&output_dir)
            .wrap_err("failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir,
            written: generated.written,
            removed: generated.removed,
        })
    };

    Ok(GenerateReport {
        task: ctx.defaults.task_name.to_string(),
        qualified_name: config.qualified_name(),
        field_count: config.fields().len(),
        warnings,
        result,
    })
}
