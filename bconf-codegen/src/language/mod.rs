//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Maps field types to language type names
//! - [`LiteralRenderer`] - Renders typed values as source literals
//! - [`NamingConvention`] - Identifier rules and reserved words
//! - [`GenerateResult`] / [`CleanResult`] / [`PreviewFile`] - Generator outputs

mod literal;
mod naming;
mod traits;

pub use literal::{LiteralRenderer, float_text, unicode_escape};
pub use naming::{IdentifierKind, NamingConvention};
pub use traits::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
