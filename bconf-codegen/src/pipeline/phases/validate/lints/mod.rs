//! Built-in lints.

mod empty_package;
mod field_naming;
mod identifier;

pub use empty_package::EmptyPackageLint;
pub use field_naming::FieldNamingLint;
pub use identifier::IdentifierLint;
