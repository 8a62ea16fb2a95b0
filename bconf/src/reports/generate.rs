//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Name of the generation task.
    pub task: String,
    /// Fully qualified name of the generated type.
    pub qualified_name: String,
    /// Number of generated constants.
    pub field_count: usize,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Files written, or the preview.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory of the task.
    pub output_dir: PathBuf,
    /// The generated file.
    pub written: PathBuf,
    /// Stale generated files that were removed.
    pub removed: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "> Task :{} ({}, {} field{})",
            self.task,
            self.qualified_name,
            self.field_count,
            if self.field_count == 1 { "" } else { "s" }
        ));
        out.key_value("Generated", &written.written.display().to_string());

        if !written.removed.is_empty() {
            out.newline();
            out.section("Removed stale files");
            for path in &written.removed {
                let shown = path.strip_prefix(&written.output_dir).unwrap_or(path);
                out.removed_item(&shown.display().to_string());
            }
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(file.content.trim_end());
    }

    out.divider("Summary");
    out.preformatted(&format!(
        "{} file{} would be generated",
        files.len(),
        if files.len() == 1 { "" } else { "s" }
    ));
}
