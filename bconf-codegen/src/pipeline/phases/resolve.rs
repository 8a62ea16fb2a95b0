//! Resolve phase - apply fallbacks and freeze the configuration.

use eyre::{Result, WrapErr};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that builds the configuration scope from the manifest and freezes
/// it into a [`bconf_ir::GenerationConfig`].
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve package and class name fallbacks and freeze the fields"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let extension = ctx
            .manifest
            .extension()
            .wrap_err("failed to collect field declarations")?;
        let config = extension.resolve(&ctx.manifest.project.group, &ctx.defaults);
        ctx.config = Some(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bconf_ir::Defaults;
    use bconf_manifest::Manifest;

    use super::*;

    #[test]
    fn test_resolve_uses_group_and_default_class() {
        let manifest: Manifest = r#"
[project]
group = "com.example"

[[buildconfig.fields]]
name = "INT_FIELD"
type = "int"
value = 2000

[[buildconfig.fields]]
name = "STRING_FIELD"
type = "string"
value = "hello"
"#
        .parse()
        .unwrap();

        let mut ctx = CompilationContext::new(manifest, ".");
        ResolvePhase.run(&mut ctx).unwrap();

        let config = ctx.config().unwrap();
        assert_eq!(config.qualified_name(), "com.example.BuildConfig");
        let names: Vec<_> = config.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["INT_FIELD", "STRING_FIELD"]);
    }

    #[test]
    fn test_resolve_honors_custom_defaults() {
        let defaults = Defaults {
            class_name: "Constants",
            ..Defaults::default()
        };
        let mut ctx = CompilationContext::new(Manifest::default(), ".").with_defaults(defaults);
        ResolvePhase.run(&mut ctx).unwrap();
        assert_eq!(ctx.config().unwrap().qualified_name(), "Constants");
    }
}
