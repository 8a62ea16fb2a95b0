//! Field declarations as written in the manifest.

use std::ops::Range;

use bconf_core::FieldType;
use bconf_ir::{BuildConfigExtension, FieldValue, RegistryError};
use serde::Deserialize;
use thiserror::Error;
use toml::{Spanned, Value};

use super::Manifest;

/// One `[[buildconfig.fields]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: Spanned<String>,
    #[serde(rename = "type")]
    pub ty: Spanned<FieldType>,
    pub value: Spanned<Value>,
}

/// A declared value that does not fit its declared type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("expected a {expected} value, found {found}")]
    TypeMismatch {
        expected: FieldType,
        found: &'static str,
    },

    #[error("{value} is out of range for {ty} ({min}..={max})")]
    OutOfRange {
        ty: FieldType,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("char value must be exactly one character, found {len}")]
    NotAChar { len: usize },

    #[error("{value} overflows float")]
    FloatOverflow { value: f64 },

    #[error("{value} cannot be represented exactly as {ty}")]
    InexactInteger { ty: FieldType, value: i64 },
}

/// Failure to build the configuration scope from the declared fields.
///
/// `index` is the position of the offending entry in `buildconfig.fields`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtensionError {
    #[error("field '{name}': {source}")]
    Field {
        index: usize,
        name: String,
        #[source]
        source: FieldError,
    },

    #[error("{source}")]
    Registry {
        index: usize,
        #[source]
        source: RegistryError,
    },
}

impl FieldDecl {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn field_type(&self) -> FieldType {
        *self.ty.get_ref()
    }

    /// Byte range of the declared value in the manifest.
    pub fn value_span(&self) -> Range<usize> {
        self.value.span()
    }

    /// Convert the TOML value into a typed value of the declared type.
    pub fn to_value(&self) -> Result<FieldValue, FieldError> {
        let ty = self.field_type();
        match (ty, self.value.get_ref()) {
            (FieldType::Boolean, Value::Boolean(b)) => Ok(FieldValue::Boolean(*b)),
            (FieldType::Byte, Value::Integer(i)) => i8::try_from(*i)
                .map(FieldValue::Byte)
                .map_err(|_| out_of_range(ty, *i)),
            (FieldType::Short, Value::Integer(i)) => i16::try_from(*i)
                .map(FieldValue::Short)
                .map_err(|_| out_of_range(ty, *i)),
            (FieldType::Int32, Value::Integer(i)) => i32::try_from(*i)
                .map(FieldValue::Int32)
                .map_err(|_| out_of_range(ty, *i)),
            (FieldType::Int64, Value::Integer(i)) => Ok(FieldValue::Int64(*i)),
            (FieldType::Float32, Value::Float(f)) => to_f32(*f).map(FieldValue::Float32),
            (FieldType::Float32, Value::Integer(i)) => {
                let narrowed = *i as f32;
                exact(ty, *i, narrowed as i128).map(|_| FieldValue::Float32(narrowed))
            }
            (FieldType::Float64, Value::Float(f)) => Ok(FieldValue::Float64(*f)),
            (FieldType::Float64, Value::Integer(i)) => {
                let widened = *i as f64;
                exact(ty, *i, widened as i128).map(|_| FieldValue::Float64(widened))
            }
            (FieldType::Char, Value::String(s)) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(FieldValue::Char(c)),
                    _ => Err(FieldError::NotAChar {
                        len: s.chars().count(),
                    }),
                }
            }
            (FieldType::String, Value::String(s)) => Ok(FieldValue::String(s.clone())),
            (expected, found) => Err(FieldError::TypeMismatch {
                expected,
                found: found.type_str(),
            }),
        }
    }
}

fn out_of_range(ty: FieldType, value: i64) -> FieldError {
    let (min, max) = ty.integer_range().unwrap_or((i64::MIN, i64::MAX));
    FieldError::OutOfRange {
        ty,
        value,
        min,
        max,
    }
}

/// `converted` is the float converted back to an integer; i128 keeps
/// `i64::MAX as f32` (2^63) from saturating back to `i64::MAX`.
fn exact(ty: FieldType, value: i64, converted: i128) -> Result<(), FieldError> {
    if converted == i128::from(value) {
        Ok(())
    } else {
        Err(FieldError::InexactInteger { ty, value })
    }
}

fn to_f32(value: f64) -> Result<f32, FieldError> {
    let narrowed = value as f32;
    if value.is_finite() && narrowed.is_infinite() {
        return Err(FieldError::FloatOverflow { value });
    }
    Ok(narrowed)
}

impl Manifest {
    /// Build the configuration scope described by this manifest.
    ///
    /// Fields are registered in declaration order; the first failing entry
    /// aborts.
    pub fn extension(&self) -> Result<BuildConfigExtension, ExtensionError> {
        let section = &self.buildconfig;
        let mut extension = BuildConfigExtension::new()
            .with_package_name(section.package_name.clone().unwrap_or_default())
            .with_class_name(section.class_name.clone().unwrap_or_default());

        for (index, decl) in section.fields.iter().enumerate() {
            let value = decl.to_value().map_err(|source| ExtensionError::Field {
                index,
                name: decl.name().to_string(),
                source,
            })?;
            extension
                .field(decl.name(), value)
                .map_err(|source| ExtensionError::Registry { index, source })?;
        }

        Ok(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(ty: &str, value: &str) -> FieldDecl {
        let src = format!("name = \"F\"\ntype = \"{ty}\"\nvalue = {value}\n");
        toml::from_str(&src).unwrap()
    }

    #[test]
    fn test_integers_checked_against_type() {
        assert_eq!(decl("byte", "127").to_value().unwrap(), FieldValue::Byte(127));
        assert_eq!(decl("short", "-60").to_value().unwrap(), FieldValue::Short(-60));
        assert_eq!(decl("int", "2000").to_value().unwrap(), FieldValue::Int32(2000));
        assert_eq!(
            decl("long", "21000000000").to_value().unwrap(),
            FieldValue::Int64(21_000_000_000)
        );

        assert_eq!(
            decl("byte", "128").to_value().unwrap_err(),
            FieldError::OutOfRange {
                ty: FieldType::Byte,
                value: 128,
                min: -128,
                max: 127
            }
        );
        assert!(matches!(
            decl("int", "21000000000").to_value(),
            Err(FieldError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_floats_accept_integers() {
        assert_eq!(
            decl("float", "1555.5").to_value().unwrap(),
            FieldValue::Float32(1555.5)
        );
        assert_eq!(decl("double", "3").to_value().unwrap(), FieldValue::Float64(3.0));
        assert!(matches!(
            decl("float", "inf").to_value().unwrap(),
            FieldValue::Float32(f) if f.is_infinite()
        ));
        assert_eq!(
            decl("float", "1e300").to_value().unwrap_err(),
            FieldError::FloatOverflow { value: 1e300 }
        );
    }

    #[test]
    fn test_integer_floats_must_be_exact() {
        assert_eq!(
            decl("float", "16777216").to_value().unwrap(),
            FieldValue::Float32(16_777_216.0)
        );
        assert_eq!(
            decl("float", "16777217").to_value().unwrap_err(),
            FieldError::InexactInteger {
                ty: FieldType::Float32,
                value: 16_777_217
            }
        );
        assert!(matches!(
            decl("float", "9223372036854775807").to_value(),
            Err(FieldError::InexactInteger { .. })
        ));

        assert_eq!(
            decl("double", "9007199254740992").to_value().unwrap(),
            FieldValue::Float64(9_007_199_254_740_992.0)
        );
        let err = decl("double", "9007199254740993").to_value().unwrap_err();
        assert_eq!(
            err.to_string(),
            "9007199254740993 cannot be represented exactly as double"
        );
        assert_eq!(
            decl("double", "-9223372036854775808").to_value().unwrap(),
            FieldValue::Float64(i64::MIN as f64)
        );
    }

    #[test]
    fn test_char_must_be_single_character() {
        assert_eq!(decl("char", "\"c\"").to_value().unwrap(), FieldValue::Char('c'));
        assert_eq!(
            decl("char", "\"ab\"").to_value().unwrap_err(),
            FieldError::NotAChar { len: 2 }
        );
        assert_eq!(
            decl("char", "\"\"").to_value().unwrap_err(),
            FieldError::NotAChar { len: 0 }
        );
    }

    #[test]
    fn test_type_mismatch_names_found_type() {
        let err = decl("boolean", "\"yes\"").to_value().unwrap_err();
        assert_eq!(err.to_string(), "expected a boolean value, found string");

        let err = decl("string", "42").to_value().unwrap_err();
        assert_eq!(err.to_string(), "expected a string value, found integer");
    }

    #[test]
    fn test_type_aliases() {
        assert_eq!(decl("bool", "true").field_type(), FieldType::Boolean);
        assert_eq!(decl("int64", "1").field_type(), FieldType::Int64);
        assert_eq!(decl("str", "\"s\"").field_type(), FieldType::String);
    }
}
