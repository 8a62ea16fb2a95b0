//! Lint for identifier validity in the output language.

use bconf_ir::GenerationConfig;
use bconf_manifest::Manifest;

use super::super::Lint;
use crate::{
    GenerateError,
    language::{IdentifierKind, NamingConvention},
    pipeline::Diagnostic,
};

/// Lint that rejects class, package and field names the output language
/// cannot compile.
pub struct IdentifierLint {
    naming: NamingConvention,
}

impl IdentifierLint {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Lint for IdentifierLint {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn check(&self, manifest: &Manifest, config: &GenerationConfig, diagnostics: &mut Vec<Diagnostic>) {
        for err in self.naming.errors(config) {
            let GenerateError::InvalidIdentifier { kind, name, .. } = &err;
            let location = match kind {
                IdentifierKind::Class => "buildconfig.class-name".to_string(),
                IdentifierKind::PackageSegment if manifest.buildconfig.package_name.is_none() => {
                    "project.group".to_string()
                }
                IdentifierKind::PackageSegment => "buildconfig.package-name".to_string(),
                IdentifierKind::Field => format!("buildconfig.fields.{}", name),
            };
            diagnostics.push(Diagnostic::error("validate", err.to_string()).at(location));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{CompilationContext, Phase, ResolvePhase};

    const NAMING: NamingConvention = NamingConvention {
        language: "Java",
        reserved_words: &["class", "int", "default"],
        reserved_type_names: &["var"],
        allow_dollar: true,
        reserve_underscores: false,
    };

    fn check(src: &str) -> Vec<Diagnostic> {
        let mut ctx = CompilationContext::new(src.parse::<Manifest>().unwrap(), ".");
        ResolvePhase.run(&mut ctx).unwrap();

        let mut diagnostics = Vec::new();
        IdentifierLint::new(NAMING).check(&ctx.manifest, ctx.config().unwrap(), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_config() {
        let diagnostics = check(
            "[project]\ngroup = \"com.example\"\n\n[[buildconfig.fields]]\nname = \"DEBUG\"\ntype = \"bool\"\nvalue = true\n",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_reserved_names() {
        let diagnostics = check(
            r#"
[project]
group = "com.default"

[buildconfig]
class-name = "var"

[[buildconfig.fields]]
name = "int"
type = "int"
value = 1
"#,
        );

        let found: Vec<_> = diagnostics
            .iter()
            .map(|d| (d.severity.is_error(), d.location.as_deref().unwrap_or("")))
            .collect();
        assert_eq!(
            found,
            [
                (true, "buildconfig.class-name"),
                (true, "project.group"),
                (true, "buildconfig.fields.int"),
            ]
        );
        assert_eq!(
            diagnostics[0].message,
            "invalid class name 'var': 'var' cannot be used as a type name in Java"
        );
    }

    #[test]
    fn test_package_location_when_set() {
        let diagnostics = check("[buildconfig]\npackage-name = \"com.1app\"\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("buildconfig.package-name")
        );
    }
}
