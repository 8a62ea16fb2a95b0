//! Toolchain detection from applied plugin ids.

use std::{fmt, str::FromStr};

use bconf_manifest::Language;
use serde::Serialize;
use thiserror::Error;

/// The compilation pipeline that consumes the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    Java,
    Kotlin,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigureError {
    #[error(
        "no supported toolchain applied; apply one of the plugins: {ids}",
        ids = Toolchain::all_plugin_ids().join(", ")
    )]
    MissingToolchain,

    #[error(
        "conflicting toolchains: both Java ({java}) and Kotlin ({kotlin}) plugins are applied; apply exactly one"
    )]
    ConflictingToolchains { java: String, kotlin: String },

    #[error("{language} output cannot be compiled by the {toolchain} toolchain")]
    UnsupportedLanguage {
        language: Language,
        toolchain: Toolchain,
    },
}

impl Toolchain {
    pub const ALL: [Toolchain; 2] = [Toolchain::Java, Toolchain::Kotlin];

    /// Plugin ids that apply this toolchain.
    pub fn plugin_ids(&self) -> &'static [&'static str] {
        match self {
            Toolchain::Java => &["java", "java-library"],
            Toolchain::Kotlin => &["org.jetbrains.kotlin.jvm", "kotlin"],
        }
    }

    /// Every recognized plugin id.
    pub fn all_plugin_ids() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .flat_map(|t| t.plugin_ids().iter().copied())
            .collect()
    }

    /// Name of the compile step the generation step must precede.
    pub fn compile_task(&self) -> &'static str {
        match self {
            Toolchain::Java => "compileJava",
            Toolchain::Kotlin => "compileKotlin",
        }
    }

    /// Whether this toolchain compiles sources written in `language`.
    ///
    /// Kotlin projects compile Java sources too.
    pub fn accepts(&self, language: Language) -> bool {
        match (self, language) {
            (_, Language::Java) => true,
            (Toolchain::Kotlin, Language::Kotlin) => true,
            (Toolchain::Java, Language::Kotlin) => false,
        }
    }

    /// Detect the toolchain from the applied plugin ids.
    ///
    /// Exactly one toolchain must be applied.
    pub fn detect<S: AsRef<str>>(plugins: &[S]) -> Result<Toolchain, ConfigureError> {
        let find = |toolchain: Toolchain| {
            plugins
                .iter()
                .map(AsRef::as_ref)
                .find(|id| toolchain.plugin_ids().contains(id))
        };

        match (find(Toolchain::Java), find(Toolchain::Kotlin)) {
            (Some(_), None) => Ok(Toolchain::Java),
            (None, Some(_)) => Ok(Toolchain::Kotlin),
            (Some(java), Some(kotlin)) => Err(ConfigureError::ConflictingToolchains {
                java: java.to_string(),
                kotlin: kotlin.to_string(),
            }),
            (None, None) => Err(ConfigureError::MissingToolchain),
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toolchain::Java => write!(f, "java"),
            Toolchain::Kotlin => write!(f, "kotlin"),
        }
    }
}

impl FromStr for Toolchain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Toolchain::Java),
            "kotlin" | "kt" => Ok(Toolchain::Kotlin),
            _ => Err(format!(
                "unknown toolchain '{}', expected one of: java, kotlin",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_single_toolchain() {
        assert_eq!(Toolchain::detect(&["java"]), Ok(Toolchain::Java));
        assert_eq!(Toolchain::detect(&["java-library"]), Ok(Toolchain::Java));
        assert_eq!(
            Toolchain::detect(&["application", "org.jetbrains.kotlin.jvm"]),
            Ok(Toolchain::Kotlin)
        );
        assert_eq!(Toolchain::detect(&["kotlin"]), Ok(Toolchain::Kotlin));
    }

    #[test]
    fn test_detect_none_names_plugin_ids() {
        let err = Toolchain::detect(&["application"]).unwrap_err();
        assert_eq!(err, ConfigureError::MissingToolchain);
        let message = err.to_string();
        for id in Toolchain::all_plugin_ids() {
            assert!(message.contains(id), "{message}");
        }

        let none: [&str; 0] = [];
        assert_eq!(Toolchain::detect(&none), Err(ConfigureError::MissingToolchain));
    }

    #[test]
    fn test_detect_both_is_conflict() {
        assert_eq!(
            Toolchain::detect(&["java", "kotlin"]),
            Err(ConfigureError::ConflictingToolchains {
                java: "java".to_string(),
                kotlin: "kotlin".to_string()
            })
        );
    }

    #[test]
    fn test_accepts_language() {
        assert!(Toolchain::Java.accepts(Language::Java));
        assert!(!Toolchain::Java.accepts(Language::Kotlin));
        assert!(Toolchain::Kotlin.accepts(Language::Java));
        assert!(Toolchain::Kotlin.accepts(Language::Kotlin));
    }

    #[test]
    fn test_compile_task() {
        assert_eq!(Toolchain::Java.compile_task(), "compileJava");
        assert_eq!(Toolchain::Kotlin.compile_task(), "compileKotlin");
    }

    #[test]
    fn test_parse_toolchain() {
        assert_eq!("java".parse(), Ok(Toolchain::Java));
        assert_eq!("Kotlin".parse(), Ok(Toolchain::Kotlin));
        assert!("scala".parse::<Toolchain>().is_err());
    }
}
