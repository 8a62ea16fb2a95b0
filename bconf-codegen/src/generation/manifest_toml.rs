//! Starter buildconfig.toml generator.

use std::path::{Path, PathBuf};

use bconf_core::{FileRules, GeneratedFile, Overwrite};
use bconf_manifest::{Language, MANIFEST_FILE};

use crate::host::Toolchain;

/// The buildconfig.toml written by `bconf init`.
pub struct StarterManifest {
    pub group: String,
    pub toolchain: Toolchain,
    pub overwrite: Overwrite,
}

impl StarterManifest {
    pub fn new(group: impl Into<String>, toolchain: Toolchain) -> Self {
        Self {
            group: group.into(),
            toolchain,
            overwrite: Overwrite::IfMissing,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    fn language(&self) -> Language {
        match self.toolchain {
            Toolchain::Java => Language::Java,
            Toolchain::Kotlin => Language::Kotlin,
        }
    }
}

impl GeneratedFile for StarterManifest {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
            header: None,
        }
    }

    fn render(&self) -> String {
        let group = toml::Value::String(self.group.clone());
        let plugin = self.toolchain.plugin_ids()[0];
        format!(
            r#"[project]
group = {group}
plugins = ["{plugin}"]
# build-dir = "build"

[buildconfig]
# package-name = "com.example.app"  # defaults to project.group
# class-name = "BuildConfig"
language = "{language}"

# Supported types: boolean, byte, short, int, long, float, double, char, string

[[buildconfig.fields]]
name = "DEBUG"
type = "boolean"
value = true

[[buildconfig.fields]]
name = "VERSION_NAME"
type = "string"
value = "0.1.0"
"#,
            language = self.language()
        )
    }
}
