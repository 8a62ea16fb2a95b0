//! Output languages for code generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Language of the generated source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Java (`public final class`)
    #[default]
    Java,
    /// Kotlin (`object`)
    Kotlin,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "kotlin" | "kt" => Ok(Language::Kotlin),
            _ => Err(format!(
                "unknown language '{}', expected 'java' or 'kotlin'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("java").unwrap(), Language::Java);
        assert_eq!(Language::from_str("Java").unwrap(), Language::Java);
        assert_eq!(Language::from_str("kotlin").unwrap(), Language::Kotlin);
        assert_eq!(Language::from_str("kt").unwrap(), Language::Kotlin);
        assert!(Language::from_str("scala").is_err());
    }

    #[test]
    fn test_default_is_java() {
        assert_eq!(Language::default(), Language::Java);
    }

    #[test]
    fn test_deserialize() {
        let kotlin: Language = serde_json::from_str(r#""kotlin""#).unwrap();
        assert_eq!(kotlin, Language::Kotlin);
        assert!(serde_json::from_str::<Language>(r#""kt""#).is_err());
    }
}
