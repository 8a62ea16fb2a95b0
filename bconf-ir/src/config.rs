//! Configuration scope and the frozen generation config.

use serde::Serialize;

use crate::{Field, FieldRegistry, FieldValue, RegistryError};

/// Explicit defaults for one generation setup.
///
/// Passed into the lifecycle instead of living in process-wide constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Class name used when none is configured.
    pub class_name: &'static str,
    /// Name of the generation step.
    pub task_name: &'static str,
    /// Output directory, relative to the build directory.
    pub output_subdir: &'static str,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            class_name: "BuildConfig",
            task_name: "genBuildConfig",
            output_subdir: "generated/source/buildconfig",
        }
    }
}

/// The accumulating configuration scope (phase one of the lifecycle).
///
/// Package and class names may be left empty; they are resolved in
/// [`BuildConfigExtension::resolve`].
#[derive(Debug, Clone, Default)]
pub struct BuildConfigExtension {
    pub package_name: String,
    pub class_name: String,
    registry: FieldRegistry,
}

impl BuildConfigExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package name.
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    /// Set the class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Declare a field.
    pub fn field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<(), RegistryError> {
        self.registry.register(name, value).map(|_| ())
    }

    /// The fields declared so far.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Resolve fallbacks and freeze the configuration.
    ///
    /// A blank package name falls back to `group`; a blank class name to
    /// `defaults.class_name`.
    pub fn resolve(self, group: &str, defaults: &Defaults) -> GenerationConfig {
        let package_name = if self.package_name.trim().is_empty() {
            group.trim().to_string()
        } else {
            self.package_name
        };
        let class_name = if self.class_name.trim().is_empty() {
            defaults.class_name.to_string()
        } else {
            self.class_name
        };

        tracing::debug!(
            package = package_name.as_str(),
            class = class_name.as_str(),
            fields = self.registry.len(),
            "resolved build config"
        );

        GenerationConfig {
            package_name,
            class_name,
            fields: self.registry.freeze(),
        }
    }
}

/// Frozen input to one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    package_name: String,
    class_name: String,
    fields: Vec<Field>,
}

impl GenerationConfig {
    /// Package the container type lives in (empty for the default package).
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Name of the container type.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fully qualified name of the container type (e.g., "com.example.BuildConfig").
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.package_name, self.class_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fallbacks() {
        let config = BuildConfigExtension::new().resolve("com.example", &Defaults::default());
        assert_eq!(config.package_name(), "com.example");
        assert_eq!(config.class_name(), "BuildConfig");
        assert_eq!(config.qualified_name(), "com.example.BuildConfig");
    }

    #[test]
    fn test_resolve_blank_names_fall_back() {
        let config = BuildConfigExtension::new()
            .with_package_name("  ")
            .with_class_name("\t")
            .resolve("io.woong.buildconfig.test", &Defaults::default());
        assert_eq!(config.package_name(), "io.woong.buildconfig.test");
        assert_eq!(config.class_name(), "BuildConfig");
    }

    #[test]
    fn test_resolve_custom_names() {
        let config = BuildConfigExtension::new()
            .with_package_name("io.woong.buildconfig.test.build")
            .with_class_name("BuildMetadata")
            .resolve("io.woong.buildconfig.test", &Defaults::default());
        assert_eq!(
            config.qualified_name(),
            "io.woong.buildconfig.test.build.BuildMetadata"
        );
    }

    #[test]
    fn test_resolve_custom_default_class() {
        let defaults = Defaults {
            class_name: "Constants",
            ..Defaults::default()
        };
        let config = BuildConfigExtension::new().resolve("", &defaults);
        assert_eq!(config.package_name(), "");
        assert_eq!(config.qualified_name(), "Constants");
    }

    #[test]
    fn test_resolve_keeps_field_order() {
        let mut extension = BuildConfigExtension::new();
        extension.field("INT_FIELD", 2000).unwrap();
        extension.field("STRING_FIELD", "hello").unwrap();

        let config = extension.resolve("com.example", &Defaults::default());
        let fields: Vec<_> = config
            .fields()
            .iter()
            .map(|f| (f.name(), f.value().clone()))
            .collect();
        assert_eq!(
            fields,
            [
                ("INT_FIELD", FieldValue::Int32(2000)),
                ("STRING_FIELD", FieldValue::String("hello".to_string())),
            ]
        );
    }

    #[test]
    fn test_field_rejects_duplicate() {
        let mut extension = BuildConfigExtension::new();
        extension.field("DEBUG", true).unwrap();
        assert!(matches!(
            extension.field("DEBUG", false),
            Err(RegistryError::Duplicate { first: 0, .. })
        ));
        assert_eq!(extension.registry().len(), 1);
    }
}
