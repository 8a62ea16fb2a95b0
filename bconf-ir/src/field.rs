//! Typed field values.

use bconf_core::FieldType;
use serde::Serialize;

/// A typed constant value.
///
/// The variant is the field's type; there is no way to pair a value with a
/// mismatching [`FieldType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    #[serde(rename = "int")]
    Int32(i32),
    #[serde(rename = "long")]
    Int64(i64),
    #[serde(rename = "float")]
    Float32(f32),
    #[serde(rename = "double")]
    Float64(f64),
    Char(char),
    String(String),
}

impl FieldValue {
    /// The type tag of this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Boolean(_) => FieldType::Boolean,
            FieldValue::Byte(_) => FieldType::Byte,
            FieldValue::Short(_) => FieldType::Short,
            FieldValue::Int32(_) => FieldType::Int32,
            FieldValue::Int64(_) => FieldType::Int64,
            FieldValue::Float32(_) => FieldType::Float32,
            FieldValue::Float64(_) => FieldType::Float64,
            FieldValue::Char(_) => FieldType::Char,
            FieldValue::String(_) => FieldType::String,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i8> for FieldValue {
    fn from(value: i8) -> Self {
        FieldValue::Byte(value)
    }
}

impl From<i16> for FieldValue {
    fn from(value: i16) -> Self {
        FieldValue::Short(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int64(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float32(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float64(value)
    }
}

impl From<char> for FieldValue {
    fn from(value: char) -> Self {
        FieldValue::Char(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// One declared constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    name: String,
    #[serde(flatten)]
    value: FieldValue,
}

impl Field {
    pub(crate) fn new(name: String, value: FieldValue) -> Self {
        Self { name, value }
    }

    /// Field name, exactly as registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw typed value (not yet rendered).
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// The declared type.
    pub fn field_type(&self) -> FieldType {
        self.value.field_type()
    }
}
