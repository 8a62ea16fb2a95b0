use std::path::{Path, PathBuf};

use bconf_codegen::{
    builder::CodeBuilder,
    language::{LiteralRenderer, TypeMapper},
};
use bconf_core::{FileRules, GeneratedFile, package_path};
use bconf_ir::{Field, GenerationConfig};

use crate::{KotlinLiterals, KotlinTypeMapper};

/// The generated `<Class>.kt` file: one `object` holding `const val`s.
pub struct BuildConfigKt<'a> {
    config: &'a GenerationConfig,
}

impl<'a> BuildConfigKt<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }
}

fn const_val(field: &Field) -> String {
    format!(
        "const val {}: {} = {}",
        field.name(),
        KotlinTypeMapper.map_field_type(field.field_type()),
        KotlinLiterals.render(field.value())
    )
}

impl GeneratedFile for BuildConfigKt<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(package_path(self.config.package_name()))
            .join(format!("{}.kt", self.config.class_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let package = self.config.package_name();

        CodeBuilder::kotlin()
            .when(!package.is_empty(), |b| {
                b.line(&format!("package {}", package)).blank()
            })
            .block_with_close(
                &format!("object {} {{", self.config.class_name()),
                "}",
                |b| b.each(self.config.fields(), |b, field| b.line(&const_val(field))),
            )
            .build()
    }
}
