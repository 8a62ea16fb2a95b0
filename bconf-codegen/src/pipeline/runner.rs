//! Pipeline orchestrator.

use std::path::PathBuf;

use bconf_ir::Defaults;
use bconf_manifest::Manifest;
use eyre::Result;

use super::{
    CompilationContext, Phase,
    phases::{ConfigurePhase, Lint, ResolvePhase, ValidatePhase},
};

/// Runs the lifecycle phases over one manifest.
///
/// Built-in phases run in order (configure, resolve, validate), followed by
/// any extra phases.
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    defaults: Defaults,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            defaults: Defaults::default(),
        }
    }

    /// Add a lint to the validate phase.
    pub fn lint(mut self, lint: impl Lint + 'static) -> Self {
        self.validate = self.validate.with_lint(lint);
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Use `defaults` instead of [`Defaults::default`].
    pub fn defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails. Diagnostics recorded before the
    /// failure are lost with the context; use [`Pipeline::run_context`] to
    /// keep them.
    pub fn run(&self, manifest: Manifest, project_dir: impl Into<PathBuf>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest, project_dir).with_defaults(self.defaults);
        self.run_context(&mut ctx)?;
        Ok(ctx)
    }

    /// Run all phases over an existing context.
    pub fn run_context(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin: [&dyn Phase; 3] = [&ConfigurePhase, &ResolvePhase, &self.validate];

        for phase in builtin {
            run_phase(phase, ctx)?;
        }
        for phase in &self.phases {
            run_phase(phase.as_ref(), ctx)?;
        }

        tracing::debug!(
            errors = ctx.error_count(),
            warnings = ctx.warning_count(),
            "pipeline finished"
        );
        Ok(())
    }
}

fn run_phase(phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
    tracing::info!(phase = phase.name(), "running phase");
    phase.run(ctx)
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::host::Toolchain;

    const MANIFEST: &str = r#"
[project]
group = "com.example"
plugins = ["java"]

[[buildconfig.fields]]
name = "INT_FIELD"
type = "int"
value = 2000
"#;

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(MANIFEST.parse::<Manifest>().unwrap(), ".")
            .unwrap();

        assert_eq!(ctx.plan().unwrap().toolchain, Toolchain::Java);
        assert_eq!(ctx.config().unwrap().qualified_name(), "com.example.BuildConfig");
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_pipeline_stops_at_configure() {
        let mut ctx = CompilationContext::new(Manifest::default(), ".");
        assert!(Pipeline::new().run_context(&mut ctx).is_err());
        assert!(ctx.config.is_none());
        assert_eq!(ctx.error_count(), 1);
    }

    #[test]
    fn test_extra_phases_run_last() {
        struct CountingPhase(Arc<AtomicUsize>);

        impl Phase for CountingPhase {
            fn name(&self) -> &'static str {
                "counting"
            }

            fn description(&self) -> &'static str {
                "Counts runs"
            }

            fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
                assert!(ctx.config.is_some());
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        Pipeline::new()
            .phase(CountingPhase(count.clone()))
            .run(MANIFEST.parse::<Manifest>().unwrap(), ".")
            .unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = Defaults {
            task_name: "generateConstants",
            ..Defaults::default()
        };
        let ctx = Pipeline::new()
            .defaults(defaults)
            .run(MANIFEST.parse::<Manifest>().unwrap(), ".")
            .unwrap();
        let plan = ctx.plan().unwrap();
        assert!(plan.task("generateConstants").is_some());
        assert_eq!(plan.task("compileJava").unwrap().depends_on, ["generateConstants"]);
    }
}
