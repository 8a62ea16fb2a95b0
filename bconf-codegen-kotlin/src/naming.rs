//! Kotlin naming conventions.

use bconf_codegen::language::NamingConvention;

/// Kotlin identifier rules.
///
/// Only hard keywords are reserved; soft and modifier keywords such as
/// `data` or `value` are valid names. `$` is not allowed on the JVM
/// backend without backticks. The generated object cannot take the name
/// of a type its properties are declared with.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    language: "Kotlin",
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
        "true", "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    reserved_type_names: &[
        "Boolean", "Byte", "Short", "Int", "Long", "Float", "Double", "Char", "String",
    ],
    allow_dollar: false,
    reserve_underscores: true,
};
