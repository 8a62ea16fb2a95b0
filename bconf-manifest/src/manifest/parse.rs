//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use bconf_ir::RegistryError;

use super::{ExtensionError, Manifest};
use crate::{Error, MANIFEST_FILE, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a buildconfig.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a buildconfig.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_fields(&manifest, &source_ctx)?;
    tracing::debug!(
        file = filename,
        fields = manifest.buildconfig.fields.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

/// Register every declared field once, mapping failures back to spans.
fn validate_fields(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let fields = &manifest.buildconfig.fields;
    match manifest.extension() {
        Ok(_) => Ok(()),
        Err(ExtensionError::Field {
            index,
            name,
            source,
        }) => Err(ctx.invalid_value_error(name, source.to_string(), fields[index].value_span())),
        Err(ExtensionError::Registry { index, source }) => {
            let decl = &fields[index];
            Err(match source {
                RegistryError::EmptyName => ctx.empty_name_error(decl.name.span()),
                RegistryError::Duplicate { name, first } => {
                    ctx.duplicate_field_error(name, fields[first].name.span(), decl.name.span())
                }
                err @ RegistryError::UnrepresentableChar { .. } => {
                    ctx.invalid_value_error(decl.name(), err.to_string(), decl.value_span())
                }
            })
        }
    }
}
