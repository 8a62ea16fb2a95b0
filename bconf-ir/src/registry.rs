//! Ordered, validated field registry.

use indexmap::{IndexMap, map::Entry};
use thiserror::Error;

use crate::{Field, FieldValue};

/// Errors raised when registering a field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("field name cannot be empty")]
    EmptyName,

    #[error("duplicate field '{name}' (first registered at position {first})")]
    Duplicate { name: String, first: usize },

    #[error(
        "char field '{name}' holds '{value}' (U+{code:04X}), which does not fit in a single UTF-16 code unit"
    )]
    UnrepresentableChar { name: String, value: char, code: u32 },
}

/// Ordered collection of field declarations for one generation run.
///
/// Append-only: fields keep their registration order, which is the
/// declaration order in the generated file. Consumed by
/// [`FieldRegistry::freeze`] once generation begins.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: IndexMap<String, Field>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field.
    ///
    /// Duplicate names are rejected rather than overwritten.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<&Field, RegistryError> {
        let name = name.into();
        let value = value.into();

        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if let FieldValue::Char(c) = value
            && c.len_utf16() != 1
        {
            return Err(RegistryError::UnrepresentableChar {
                name,
                value: c,
                code: c as u32,
            });
        }

        let position = self.fields.len();
        match self.fields.entry(name) {
            Entry::Occupied(entry) => Err(RegistryError::Duplicate {
                name: entry.key().clone(),
                first: entry.index(),
            }),
            Entry::Vacant(entry) => {
                tracing::trace!(name = entry.key().as_str(), position, "registered field");
                let field = Field::new(entry.key().clone(), value);
                Ok(&*entry.insert(field))
            }
        }
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Consume the registry, yielding the fields in registration order.
    pub fn freeze(self) -> Vec<Field> {
        self.fields.into_values().collect()
    }
}
