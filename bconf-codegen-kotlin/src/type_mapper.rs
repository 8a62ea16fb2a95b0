//! Kotlin type mapper implementation.

use bconf_codegen::language::TypeMapper;
use bconf_core::FieldType;

/// Maps field types to Kotlin's built-in types.
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn map_field_type(&self, ty: FieldType) -> &'static str {
        match ty {
            FieldType::Boolean => "Boolean",
            FieldType::Byte => "Byte",
            FieldType::Short => "Short",
            FieldType::Int32 => "Int",
            FieldType::Int64 => "Long",
            FieldType::Float32 => "Float",
            FieldType::Float64 => "Double",
            FieldType::Char => "Char",
            FieldType::String => "String",
        }
    }
}
