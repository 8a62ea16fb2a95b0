//! Java naming conventions.

use bconf_codegen::language::NamingConvention;

/// Java identifier rules.
///
/// `true`, `false` and `null` are literals but cannot be used as
/// identifiers either; `_` has been a keyword since Java 9. A class named
/// `String` would shadow `java.lang.String` in its own field declarations.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    language: "Java",
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null", "_",
    ],
    reserved_type_names: &["var", "yield", "record", "sealed", "permits", "String"],
    allow_dollar: true,
    reserve_underscores: false,
};

#[cfg(test)]
mod tests {
    use bconf_codegen::language::{IdentifierKind, TypeMapper};
    use bconf_core::FieldType;

    use super::*;
    use crate::JavaTypeMapper;

    #[test]
    fn test_java_reserved_words() {
        assert!(JAVA_NAMING.is_reserved("class"));
        assert!(JAVA_NAMING.is_reserved("null"));
        assert!(JAVA_NAMING.is_reserved("_"));
        assert!(!JAVA_NAMING.is_reserved("BuildConfig"));
    }

    #[test]
    fn test_java_identifiers() {
        assert_eq!(JAVA_NAMING.check("$VERSION", IdentifierKind::Field), None);
        assert_eq!(JAVA_NAMING.check("__", IdentifierKind::Field), None);
        assert_eq!(JAVA_NAMING.check("record", IdentifierKind::Field), None);
        assert!(JAVA_NAMING.check("record", IdentifierKind::Class).is_some());
        assert!(JAVA_NAMING.check("goto", IdentifierKind::PackageSegment).is_some());
    }

    #[test]
    fn test_mapped_types_are_not_class_names() {
        for ty in FieldType::ALL {
            let name = JavaTypeMapper.map_field_type(ty);
            assert!(JAVA_NAMING.check(name, IdentifierKind::Class).is_some(), "{name}");
        }
        assert_eq!(JAVA_NAMING.check("String", IdentifierKind::Field), None);
    }
}
