//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the pipeline.
///
/// Phases run in order over a shared [`CompilationContext`]. Non-fatal
/// issues are recorded as diagnostics; a returned error stops the pipeline.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
