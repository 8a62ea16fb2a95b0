//! Built-in pipeline phases.
//!
//! - [`ConfigurePhase`] - detects the toolchain and wires the build plan
//! - [`ResolvePhase`] - applies fallbacks and freezes the configuration
//! - [`ValidatePhase`] - runs lints over the frozen configuration

mod configure;
mod resolve;
mod validate;

pub use configure::ConfigurePhase;
pub use resolve::ResolvePhase;
pub use validate::{EmptyPackageLint, FieldNamingLint, IdentifierLint, Lint, ValidatePhase};
