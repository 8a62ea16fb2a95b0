//! Validate phase - runs lints over the frozen configuration.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{EmptyPackageLint, FieldNamingLint, IdentifierLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the resolved configuration using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the language-independent lints.
    ///
    /// The identifier lint depends on the output language and is added with
    /// [`ValidatePhase::with_lint`].
    pub fn new() -> Self {
        Self {
            lints: vec![Box::new(FieldNamingLint), Box::new(EmptyPackageLint)],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check names in the resolved configuration"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let Some(config) = ctx.config.as_ref() else {
            bail!("configuration not resolved - did the resolve phase run?");
        };

        for lint in &self.lints {
            lint.check(&ctx.manifest, config, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
