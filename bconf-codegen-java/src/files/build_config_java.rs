use std::path::{Path, PathBuf};

use bconf_codegen::{
    builder::CodeBuilder,
    language::{LiteralRenderer, TypeMapper},
};
use bconf_core::{FileRules, GeneratedFile, package_path};
use bconf_ir::{Field, GenerationConfig};

use crate::{JavaLiterals, JavaTypeMapper};

/// The generated `<Class>.java` file.
pub struct BuildConfigJava<'a> {
    config: &'a GenerationConfig,
}

impl<'a> BuildConfigJava<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    fn field_line(field: &Field) -> String {
        format!(
            "public static final {} {} = {};",
            JavaTypeMapper.map_field_type(field.field_type()),
            field.name(),
            JavaLiterals.render(field.value())
        )
    }
}

impl GeneratedFile for BuildConfigJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(package_path(self.config.package_name()))
            .join(format!("{}.java", self.config.class_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let package = self.config.package_name();
        let class = self.config.class_name();
        let fields = self.config.fields();

        CodeBuilder::java()
            .when(!package.is_empty(), |b| {
                b.line(&format!("package {};", package)).blank()
            })
            .block_with_close(&format!("public final class {} {{", class), "}", |b| {
                b.when(!fields.is_empty(), |b| {
                    b.each(fields, |b, field| b.line(&Self::field_line(field)))
                        .blank()
                })
                .block_with_close(&format!("private {}() {{", class), "}", |b| b)
            })
            .build()
    }
}
