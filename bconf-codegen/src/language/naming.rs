//! Identifier rules for target languages.

use std::fmt;

use bconf_ir::GenerationConfig;
use serde::Serialize;

use crate::GenerateError;

/// What a checked name is used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierKind {
    Class,
    PackageSegment,
    Field,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Class => write!(f, "class"),
            IdentifierKind::PackageSegment => write!(f, "package segment"),
            IdentifierKind::Field => write!(f, "field"),
        }
    }
}

/// Language-specific naming rules.
///
/// Identifiers are restricted to ASCII so the generated file stays ASCII.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Display name of the language, used in messages.
    pub language: &'static str,
    /// Words that can never be used as identifiers.
    pub reserved_words: &'static [&'static str],
    /// Valid identifiers the generated type cannot take: contextual keywords
    /// and the types its declarations refer to by simple name.
    pub reserved_type_names: &'static [&'static str],
    /// Whether `$` may appear in identifiers.
    pub allow_dollar: bool,
    /// Whether names made only of underscores are reserved.
    pub reserve_underscores: bool,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    fn is_start(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || (self.allow_dollar && c == '$')
    }

    fn is_part(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || (self.allow_dollar && c == '$')
    }

    /// Why `name` is not usable as `kind`, or `None` if it is.
    pub fn check(&self, name: &str, kind: IdentifierKind) -> Option<String> {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Some("name is empty".to_string());
        };

        if !self.is_start(first) {
            return Some(format!("cannot start with '{}'", first));
        }
        if let Some(bad) = chars.find(|c| !self.is_part(*c)) {
            return Some(format!("'{}' is not allowed in {} identifiers", bad, self.language));
        }
        if self.is_reserved(name) {
            return Some(format!("'{}' is a reserved word in {}", name, self.language));
        }
        if self.reserve_underscores && name.chars().all(|c| c == '_') {
            return Some(format!("underscore-only names are reserved in {}", self.language));
        }
        if kind == IdentifierKind::Class && self.reserved_type_names.contains(&name) {
            return Some(format!("'{}' cannot be used as a type name in {}", name, self.language));
        }
        None
    }

    /// Every invalid name in `config`: class name, then package segments, then fields.
    pub fn errors(&self, config: &GenerationConfig) -> Vec<GenerateError> {
        let package = config.package_name();
        let segments = package
            .split('.')
            .filter(|_| !package.is_empty())
            .map(|segment| (segment, IdentifierKind::PackageSegment));
        let fields = config
            .fields()
            .iter()
            .map(|field| (field.name(), IdentifierKind::Field));

        std::iter::once((config.class_name(), IdentifierKind::Class))
            .chain(segments)
            .chain(fields)
            .filter_map(|(name, kind)| {
                self.check(name, kind)
                    .map(|reason| GenerateError::InvalidIdentifier {
                        kind,
                        name: name.to_string(),
                        reason,
                    })
            })
            .collect()
    }

    /// Fail on the first invalid name in `config`.
    pub fn validate(&self, config: &GenerationConfig) -> Result<(), GenerateError> {
        match self.errors(config).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
