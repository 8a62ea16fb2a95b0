//! Java code generator for bconf.
//!
//! Renders a [`bconf_ir::GenerationConfig`] as a single
//! `public final class` of `public static final` constants.

mod generator;
mod literal;
mod naming;
mod type_mapper;

pub mod files;

pub use bconf_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use literal::JavaLiterals;
pub use naming::JAVA_NAMING;
pub use type_mapper::JavaTypeMapper;
