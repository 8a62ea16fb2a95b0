//! Java type mapper implementation.

use bconf_codegen::language::TypeMapper;
use bconf_core::FieldType;

/// Maps field types to Java primitive types (and `String`).
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn map_field_type(&self, ty: FieldType) -> &'static str {
        match ty {
            FieldType::Boolean => "boolean",
            FieldType::Byte => "byte",
            FieldType::Short => "short",
            FieldType::Int32 => "int",
            FieldType::Int64 => "long",
            FieldType::Float32 => "float",
            FieldType::Float64 => "double",
            FieldType::Char => "char",
            FieldType::String => "String",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_field_type() {
        let mapper = JavaTypeMapper;
        assert_eq!(mapper.map_field_type(FieldType::Int64), "long");
        assert_eq!(mapper.map_field_type(FieldType::String), "String");
        assert_eq!(mapper.map_field_type(FieldType::Char), "char");
    }
}
