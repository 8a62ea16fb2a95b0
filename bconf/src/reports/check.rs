//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Fully qualified name of the type that would be generated.
    pub qualified_name: Option<String>,
    /// Number of declared fields.
    pub field_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        if let Some(name) = &self.qualified_name {
            out.newline();
            out.key_value("  Class", name);
            out.key_value("  Fields", &self.field_count.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::TextOutput;

    #[test]
    fn test_render_errors_only() {
        let report = CheckReport {
            config_path: PathBuf::from("buildconfig.toml"),
            qualified_name: None,
            field_count: 0,
            errors: vec!["no supported toolchain applied\n  --> project.plugins".to_string()],
            warnings: Vec::new(),
            infos: Vec::new(),
        };

        let mut out = TextOutput::default();
        report.render(&mut out);
        assert!(!report.is_valid());
        assert_eq!(
            out.text(),
            "error: no supported toolchain applied\n  --> project.plugins\n"
        );
    }

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("buildconfig.toml"),
            qualified_name: Some("com.example.BuildConfig".to_string()),
            field_count: 2,
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        };

        let mut out = TextOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "✓ buildconfig.toml is valid",
                "",
                "  Class: com.example.BuildConfig",
                "  Fields: 2",
            ]
        );
    }
}
