use std::path::Path;

use bconf_codegen::{
    generation::remove_stale_files,
    language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use bconf_core::GeneratedFile;
use bconf_ir::GenerationConfig;
use eyre::Result;

use crate::{KOTLIN_NAMING, files::BuildConfigKt};

/// Kotlin code generator that produces an `object` of constants
pub struct Generator {
    config: GenerationConfig,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        KOTLIN_NAMING.validate(&self.config)?;
        let file = self.file();
        Ok(vec![PreviewFile {
            path: file.path(Path::new("")),
            content: file.contents(),
        }])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        KOTLIN_NAMING.validate(&self.config)?;

        let file = self.file();
        file.write(output_dir)?;
        let written = file.path(output_dir);
        tracing::info!(
            class = self.config.qualified_name().as_str(),
            fields = self.config.fields().len(),
            path = %written.display(),
            "generated kotlin source"
        );

        let removed = remove_stale_files(output_dir, self.file_extension(), &written)?;
        Ok(GenerateResult { written, removed })
    }

    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        let keep = self.file().path(output_dir);
        let removed = remove_stale_files(output_dir, self.file_extension(), &keep)?;
        Ok(CleanResult { removed })
    }
}

impl Generator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Create a generator from a context the pipeline has run over.
    pub fn from_context(ctx: &CompilationContext) -> Result<Self> {
        Ok(Self::new(ctx.config()?.clone()))
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn file(&self) -> BuildConfigKt<'_> {
        BuildConfigKt::new(&self.config)
    }
}
