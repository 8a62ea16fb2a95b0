//! Manifest types and parsing for buildconfig.toml files.

mod field;
mod file;
mod language;
mod parse;

pub use field::{ExtensionError, FieldDecl, FieldError};
pub use file::ManifestFile;
pub use language::Language;
pub use parse::parse_manifest;
use serde::Deserialize;

/// Root manifest for buildconfig.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Host project facts
    #[serde(default)]
    pub project: ProjectConfig,

    /// What to generate
    #[serde(default)]
    pub buildconfig: BuildConfigSection,
}

/// `[project]`: what the host build knows about the project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ProjectConfig {
    /// Group id, the fallback package name.
    #[serde(default)]
    pub group: String,

    /// Applied plugin ids, used for toolchain detection.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Build directory, relative to the project directory.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
}

fn default_build_dir() -> String {
    "build".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            group: String::new(),
            plugins: Vec::new(),
            build_dir: default_build_dir(),
        }
    }
}

/// `[buildconfig]`: the configuration surface.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BuildConfigSection {
    pub package_name: Option<String>,
    pub class_name: Option<String>,
    #[serde(default)]
    pub language: Language,
    /// Declared fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl BuildConfigSection {
    /// Find a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name() == name)
    }
}
