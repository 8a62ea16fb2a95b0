//! Field model for the bconf build-config generator.
//!
//! This crate holds the types that flow from configuration to code
//! generation:
//!
//! ```text
//! buildconfig.toml → bconf-manifest (parsing) → BuildConfigExtension
//!     → resolve() → GenerationConfig → codegen
//! ```
//!
//! The types are language-agnostic: nothing here knows about Java or
//! Kotlin literal syntax.

mod config;
mod field;
mod registry;

pub use config::{BuildConfigExtension, Defaults, GenerationConfig};
pub use field::{Field, FieldValue};
pub use registry::{FieldRegistry, RegistryError};
