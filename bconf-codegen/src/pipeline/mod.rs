//! The generation lifecycle as a pipeline of phases.
//!
//! ```text
//! configure → resolve → validate
//! ```
//!
//! `configure` detects the toolchain and wires the build plan, `resolve`
//! applies fallbacks and freezes the configuration, and `validate` runs the
//! lints. Diagnostics from every phase are collected in the
//! [`CompilationContext`]; any error aborts the run.
//!
//! # Example
//!
//! ```ignore
//! use bconf_codegen::pipeline::{IdentifierLint, Pipeline};
//!
//! let ctx = Pipeline::new()
//!     .lint(IdentifierLint::new(JAVA_NAMING))
//!     .run(manifest, project_dir)?;
//!
//! let generator = Generator::from_context(&ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use phases::{
    ConfigurePhase, EmptyPackageLint, FieldNamingLint, IdentifierLint, Lint, ResolvePhase,
    ValidatePhase,
};
pub use runner::Pipeline;
