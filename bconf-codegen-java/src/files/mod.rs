//! Files produced by the Java generator.

mod build_config_java;

pub use build_config_java::BuildConfigJava;
