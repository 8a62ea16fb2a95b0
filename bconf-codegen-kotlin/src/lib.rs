//! Kotlin code generator for bconf.
//!
//! Renders a [`bconf_ir::GenerationConfig`] as a single `object` of
//! `const val` properties.

mod generator;
mod literal;
mod naming;
mod type_mapper;

pub mod files;

pub use bconf_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use literal::KotlinLiterals;
pub use naming::KOTLIN_NAMING;
pub use type_mapper::KotlinTypeMapper;
