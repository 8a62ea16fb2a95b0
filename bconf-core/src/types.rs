use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Supported constant kinds.
///
/// This is a language-agnostic representation of field types. Each target
/// language maps every variant to a type name and a literal rule; adding a
/// variant forces both tables to be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FieldType {
    Boolean,
    Byte,
    Short,
    Int32,
    Int64,
    Float32,
    Float64,
    Char,
    String,
}

impl FieldType {
    /// All field types, in declaration order.
    pub const ALL: [FieldType; 9] = [
        FieldType::Boolean,
        FieldType::Byte,
        FieldType::Short,
        FieldType::Int32,
        FieldType::Int64,
        FieldType::Float32,
        FieldType::Float64,
        FieldType::Char,
        FieldType::String,
    ];

    /// Get the manifest type name (used in buildconfig.toml)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::Byte => "byte",
            FieldType::Short => "short",
            FieldType::Int32 => "int",
            FieldType::Int64 => "long",
            FieldType::Float32 => "float",
            FieldType::Float64 => "double",
            FieldType::Char => "char",
            FieldType::String => "string",
        }
    }

    /// Inclusive integer range for integral types, `None` otherwise.
    pub fn integer_range(&self) -> Option<(i64, i64)> {
        match self {
            FieldType::Byte => Some((i8::MIN.into(), i8::MAX.into())),
            FieldType::Short => Some((i16::MIN.into(), i16::MAX.into())),
            FieldType::Int32 => Some((i32::MIN.into(), i32::MAX.into())),
            FieldType::Int64 => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" | "bool" => Ok(FieldType::Boolean),
            "byte" => Ok(FieldType::Byte),
            "short" => Ok(FieldType::Short),
            "int" | "int32" => Ok(FieldType::Int32),
            "long" | "int64" => Ok(FieldType::Int64),
            "float" | "float32" => Ok(FieldType::Float32),
            "double" | "float64" => Ok(FieldType::Float64),
            "char" => Ok(FieldType::Char),
            "string" | "str" => Ok(FieldType::String),
            _ => Err(format!(
                "unknown field type '{}', expected one of: {}",
                s,
                FieldType::ALL.map(|t| t.as_str()).join(", ")
            )),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for ty in FieldType::ALL {
            assert_eq!(ty.as_str().parse::<FieldType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("bool".parse::<FieldType>().unwrap(), FieldType::Boolean);
        assert_eq!("int64".parse::<FieldType>().unwrap(), FieldType::Int64);
        assert_eq!("float32".parse::<FieldType>().unwrap(), FieldType::Float32);
        assert_eq!("str".parse::<FieldType>().unwrap(), FieldType::String);
    }

    #[test]
    fn test_unknown_type() {
        let err = "list".parse::<FieldType>().unwrap_err();
        assert!(err.contains("unknown field type 'list'"));
        assert!(err.contains("boolean, byte, short, int, long, float, double, char, string"));
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(FieldType::Byte.integer_range(), Some((-128, 127)));
        assert_eq!(FieldType::Short.integer_range(), Some((-32768, 32767)));
        assert_eq!(FieldType::Float64.integer_range(), None);
        assert_eq!(FieldType::String.integer_range(), None);
    }

    #[test]
    fn test_serde() {
        #[derive(Serialize, Deserialize)]
        struct Decl {
            r#type: FieldType,
        }

        let decl: Decl = toml::from_str(r#"type = "long""#).unwrap();
        assert_eq!(decl.r#type, FieldType::Int64);
        assert_eq!(toml::to_string(&decl).unwrap().trim(), r#"type = "long""#);

        assert!(toml::from_str::<Decl>(r#"type = "map""#).is_err());
    }
}
