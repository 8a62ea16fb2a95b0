use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest content and filename so the error factories below
/// only need the parts that differ per error.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid field value error.
    pub fn invalid_value_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InvalidValue {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate field error labelling both declarations.
    pub fn duplicate_field_error(
        &self,
        name: impl Into<String>,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            name: name.into(),
        })
    }

    /// Create an empty field name error.
    pub fn empty_name_error(&self, span: Range<usize>) -> Box<Error> {
        Box::new(Error::EmptyFieldName {
            src: self.named_source(),
            span: span.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'bconf init' to create a starter buildconfig.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse buildconfig.toml")]
    #[diagnostic(code(bconf::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for field '{name}'")]
    #[diagnostic(code(bconf::invalid_value))]
    InvalidValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        name: String,
        reason: String,
    },

    #[error("duplicate field '{name}'")]
    #[diagnostic(
        code(bconf::duplicate_field),
        help("each field name may be declared once; remove or rename one of them")
    )]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("field name cannot be empty")]
    #[diagnostic(code(bconf::empty_name))]
    EmptyFieldName {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty name")]
        span: SourceSpan,
    },
}
