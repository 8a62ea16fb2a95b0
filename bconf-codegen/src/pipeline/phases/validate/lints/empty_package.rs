//! Lint for generating into the default package.

use bconf_ir::GenerationConfig;
use bconf_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when the resolved package is empty.
///
/// Types in the default package cannot be imported from named packages.
pub struct EmptyPackageLint;

impl Lint for EmptyPackageLint {
    fn name(&self) -> &'static str {
        "empty-package"
    }

    fn check(&self, _manifest: &Manifest, config: &GenerationConfig, diagnostics: &mut Vec<Diagnostic>) {
        if config.package_name().is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "'{}' will be generated in the default package; set buildconfig.package-name or project.group",
                        config.class_name()
                    ),
                )
                .at("buildconfig.package-name"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use bconf_ir::{BuildConfigExtension, Defaults};

    use super::*;

    #[test]
    fn test_empty_package_warns() {
        let config = BuildConfigExtension::new().resolve("", &Defaults::default());
        let mut diagnostics = Vec::new();
        EmptyPackageLint.check(&Manifest::default(), &config, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'BuildConfig'"));
    }

    #[test]
    fn test_group_fallback_is_enough() {
        let config = BuildConfigExtension::new().resolve("com.example", &Defaults::default());
        let mut diagnostics = Vec::new();
        EmptyPackageLint.check(&Manifest::default(), &config, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
