//! Unified language dispatch.
//!
//! Centralizes the language-specific naming rules and generator creation.

use bconf_codegen::{
    language::{LanguageCodegen, NamingConvention},
    pipeline::{CompilationContext, IdentifierLint, Pipeline},
};
use bconf_codegen_java::{Generator as JavaGenerator, JAVA_NAMING};
use bconf_codegen_kotlin::{Generator as KotlinGenerator, KOTLIN_NAMING};
use bconf_manifest::Language;
use eyre::Result;

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Identifier rules of the output language.
    pub fn naming(&self) -> NamingConvention {
        match self.language {
            Language::Java => JAVA_NAMING,
            Language::Kotlin => KOTLIN_NAMING,
        }
    }

    /// The lifecycle pipeline, with identifier checks for this language.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new().lint(IdentifierLint::new(self.naming()))
    }

    /// Create a generator from a context the pipeline has run over.
    pub fn generator(&self, ctx: &CompilationContext) -> Result<Box<dyn LanguageCodegen>> {
        Ok(match self.language {
            Language::Java => Box::new(JavaGenerator::from_context(ctx)?),
            Language::Kotlin => Box::new(KotlinGenerator::from_context(ctx)?),
        })
    }
}
