//! Clean operation - remove generated output.

use std::path::{Path, PathBuf};

use bconf_codegen::{generation::find_stale_files, language::PreviewFile};
use bconf_manifest::Manifest;
use eyre::{Context, Result};

use crate::{language::LanguageSupport, reports::CleanReport};

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Directory the build directory is resolved against.
    pub project_dir: &'a Path,
    /// Only remove generated files the current configuration no longer produces.
    pub stale_only: bool,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// By default the whole output directory of the generation task is removed.
pub fn clean(manifest: &Manifest, opts: CleanOptions) -> Result<CleanReport> {
    let lang = LanguageSupport::get(manifest.buildconfig.language);
    let ctx = lang
        .pipeline()
        .run(manifest.clone(), opts.project_dir)
        .wrap_err("pipeline failed")?;

    let warnings = ctx.warnings().map(ToString::to_string).collect();
    let output_dir = ctx.output_dir()?;

    let removed = if opts.stale_only {
        let generator = lang.generator(&ctx)?;
        if opts.dry_run {
            let keep = current_file(&output_dir, &generator.preview()?);
            find_stale_files(&output_dir, generator.file_extension(), &keep)?
        } else {
            generator
                .clean(&output_dir)
                .wrap_err("failed to clean stale files")?
                .removed
        }
    } else {
        remove_output_dir(&output_dir, opts.dry_run)?
    };

    Ok(CleanReport {
        dry_run: opts.dry_run,
        warnings,
        removed,
    })
}

fn current_file(output_dir: &Path, preview: &[PreviewFile]) -> PathBuf {
    preview
        .first()
        .map(|f| output_dir.join(&f.path))
        .unwrap_or_default()
}

fn remove_output_dir(output_dir: &Path, dry_run: bool) -> Result<Vec<PathBuf>> {
    if !output_dir.exists() {
        return Ok(Vec::new());
    }
    if !dry_run {
        std::fs::remove_dir_all(output_dir)
            .wrap_err_with(|| format!("failed to remove '{}'", output_dir.display()))?;
        tracing::info!(path = %output_dir.display(), "removed output directory");
    }
    Ok(vec![output_dir.to_path_buf()])
}
