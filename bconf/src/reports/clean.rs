//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from cleaning generated output.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
    /// Removed files or directories.
    pub removed: Vec<PathBuf>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.removed.is_empty() {
            out.preformatted("Nothing to clean.");
            return;
        }

        out.section(if self.dry_run { "Would delete" } else { "Deleted" });
        for path in &self.removed {
            out.removed_item(&path.display().to_string());
        }
    }
}
