//! Configure phase - toolchain detection and build-step wiring.

use eyre::Result;

use crate::{
    host::{BuildPlan, ConfigureError, Toolchain},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that detects the toolchain and produces the [`BuildPlan`].
///
/// Fails fast when no toolchain, or more than one, is applied, and when the
/// requested output language cannot be compiled by the detected toolchain.
pub struct ConfigurePhase;

impl Phase for ConfigurePhase {
    fn name(&self) -> &'static str {
        "configure"
    }

    fn description(&self) -> &'static str {
        "Detect the toolchain and wire the generation step"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let language = ctx.manifest.buildconfig.language;

        let toolchain = match Toolchain::detect(&ctx.manifest.project.plugins) {
            Ok(toolchain) => toolchain,
            Err(err) => return fail(ctx, err, "project.plugins"),
        };

        if !toolchain.accepts(language) {
            let err = ConfigureError::UnsupportedLanguage {
                language,
                toolchain,
            };
            return fail(ctx, err, "buildconfig.language");
        }

        let plan = BuildPlan::wire(toolchain, language, ctx.build_dir(), &ctx.defaults);
        ctx.plan = Some(plan);
        Ok(())
    }
}

fn fail(ctx: &mut CompilationContext, err: ConfigureError, location: &str) -> Result<()> {
    ctx.add_diagnostic(Diagnostic::error("configure", err.to_string()).at(location));
    Err(err.into())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use bconf_manifest::Manifest;

    use super::*;

    fn context(src: &str) -> CompilationContext {
        CompilationContext::new(src.parse::<Manifest>().unwrap(), "/project")
    }

    #[test]
    fn test_java_project() {
        let mut ctx = context("[project]\nplugins = [\"java\"]\n");
        ConfigurePhase.run(&mut ctx).unwrap();

        let plan = ctx.plan.as_ref().unwrap();
        assert_eq!(plan.toolchain, Toolchain::Java);
        assert_eq!(
            ctx.output_dir().unwrap(),
            Path::new("/project/build/generated/source/buildconfig/java/main")
        );
    }

    #[test]
    fn test_kotlin_output_on_kotlin_project() {
        let mut ctx = context(
            "[project]\nplugins = [\"org.jetbrains.kotlin.jvm\"]\n\n[buildconfig]\nlanguage = \"kotlin\"\n",
        );
        ConfigurePhase.run(&mut ctx).unwrap();
        assert_eq!(ctx.plan.as_ref().unwrap().toolchain, Toolchain::Kotlin);
    }

    #[test]
    fn test_missing_toolchain_fails() {
        let mut ctx = context("[project]\nplugins = [\"application\"]\n");
        let err = ConfigurePhase.run(&mut ctx).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigureError>(),
            Some(&ConfigureError::MissingToolchain)
        );
        assert!(ctx.plan.is_none());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.diagnostics[0].location.as_deref(), Some("project.plugins"));
    }

    #[test]
    fn test_kotlin_output_on_java_project_fails() {
        let mut ctx = context("[project]\nplugins = [\"java\"]\n\n[buildconfig]\nlanguage = \"kotlin\"\n");
        let err = ConfigurePhase.run(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("cannot be compiled by the java toolchain"));
        assert_eq!(
            ctx.diagnostics[0].location.as_deref(),
            Some("buildconfig.language")
        );
    }
}
