//! Errors raised by configuration and generation.

use thiserror::Error;

use crate::language::IdentifierKind;

/// Generation aborted before anything was written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidIdentifier {
        kind: IdentifierKind,
        name: String,
        reason: String,
    },
}
