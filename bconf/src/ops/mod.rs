//! Core operations.
//!
//! This module contains the business logic for bconf commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;
pub mod plan;

pub use check::check;
pub use clean::clean;
pub use generate::generate;
pub use plan::plan;

#[cfg(test)]
pub(crate) mod testing {
    use std::{fs, path::Path};

    use bconf_manifest::Manifest;

    /// Write `content` as a manifest into `dir` and parse it.
    pub fn manifest(dir: &Path, content: &str) -> Manifest {
        fs::write(dir.join("buildconfig.toml"), content).unwrap();
        content.parse().unwrap()
    }

    pub const JAVA_PROJECT: &str = r#"
[project]
group = "com.example"
plugins = ["java"]

[[buildconfig.fields]]
name = "INT_FIELD"
type = "int"
value = 2000

[[buildconfig.fields]]
name = "STRING_FIELD"
type = "string"
value = "hello"
"#;
}
