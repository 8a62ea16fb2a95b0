//! The build host's side of generation: toolchain detection and step wiring.

mod plan;
mod toolchain;

pub use plan::{BuildPlan, SourceRoot, Task};
pub use toolchain::{ConfigureError, Toolchain};
