use std::path::Path;

use bconf_codegen::{
    generation::remove_stale_files,
    language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use bconf_core::GeneratedFile;
use bconf_ir::GenerationConfig;
use eyre::Result;

use crate::{JAVA_NAMING, files::BuildConfigJava};

/// Java code generator that produces a `public final class` of constants
pub struct Generator {
    config: GenerationConfig,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        JAVA_NAMING.validate(&self.config)?;
        let file = self.file();
        Ok(vec![PreviewFile {
            path: file.path(Path::new("")),
            content: file.contents(),
        }])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        JAVA_NAMING.validate(&self.config)?;

        let file = self.file();
        file.write(output_dir)?;
        let written = file.path(output_dir);
        tracing::info!(
            class = self.config.qualified_name().as_str(),
            fields = self.config.fields().len(),
            path = %written.display(),
            "generated java source"
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

    fn file(&self) -> BuildConfigJava<'_> {
        BuildConfigJava::new(&self.config)
    }
}
