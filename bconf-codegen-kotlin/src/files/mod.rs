//! Files produced by the Kotlin generator.

mod build_config_kt;

pub use build_config_kt::BuildConfigKt;
