//! Lint for field naming conventions.

use bconf_core::{is_upper_snake_case, to_upper_snake_case};
use bconf_ir::GenerationConfig;
use bconf_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about field names that aren't UPPER_SNAKE_CASE.
///
/// Examples: `DEBUG`, `VERSION_CODE`, `API_V2_URL`
pub struct FieldNamingLint;

impl Lint for FieldNamingLint {
    fn name(&self) -> &'static str {
        "field-naming"
    }

    fn check(&self, _manifest: &Manifest, config: &GenerationConfig, diagnostics: &mut Vec<Diagnostic>) {
        for field in config.fields() {
            let name = field.name();
            if is_upper_snake_case(name) {
                continue;
            }
            let suggestion = to_upper_snake_case(name);
            let message = if suggestion.is_empty() || suggestion == name {
                format!("field '{}' should use UPPER_SNAKE_CASE", name)
            } else {
                format!(
                    "field '{}' should use UPPER_SNAKE_CASE (e.g., '{}')",
                    name, suggestion
                )
            };
            diagnostics.push(
                Diagnostic::warning("validate", message).at(format!("buildconfig.fields.{}", name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use bconf_ir::{BuildConfigExtension, Defaults};

    use super::*;

    fn check(names: &[&str]) -> Vec<Diagnostic> {
        let mut extension = BuildConfigExtension::new();
        for name in names {
            extension.field(*name, true).unwrap();
        }
        let config = extension.resolve("com.example", &Defaults::default());

        let mut diagnostics = Vec::new();
        FieldNamingLint.check(&Manifest::default(), &config, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_names() {
        assert!(check(&["DEBUG", "VERSION_CODE", "API_V2_URL"]).is_empty());
    }

    #[test]
    fn test_invalid_names_suggest_fix() {
        let diagnostics = check(&["versionCode", "build_type"]);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
        assert!(diagnostics[0].message.contains("'VERSION_CODE'"));
        assert!(diagnostics[1].message.contains("'BUILD_TYPE'"));
        assert_eq!(
            diagnostics[1].location.as_deref(),
            Some("buildconfig.fields.build_type")
        );
    }
}
