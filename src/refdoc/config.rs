//! Configuration for documentation fixtures.
//!
//! `defaults/refdoc.default.toml` is embedded so the conventional layout
//! (`<root>/reference/services/<service>/<sub_folder>/<file>.rst`) works without
//! any files on disk. Callers layer their own TOML files or single-key overrides
//! on top via [`Loader`] before deserializing into [`RefdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/refdoc.default.toml");

/// Top-level configuration consumed by fixtures and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefdocConfig {
    pub layout: LayoutConfig,
    pub fixture: FixtureConfig,
}

/// Where generated files live below a documentation root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    pub reference_dir: String,
    pub services_dir: String,
    pub extension: String,
}

impl LayoutConfig {
    /// `<root>/<reference_dir>/<services_dir>`
    pub fn services_root(&self, root: &Path) -> PathBuf {
        root.join(&self.reference_dir).join(&self.services_dir)
    }

    /// `<services_root>/<service>/<sub_folder>/<file_name>.<extension>`
    pub fn nested_file_path(
        &self,
        services_root: &Path,
        service_name: &str,
        sub_folder: &str,
        file_name: &str,
    ) -> PathBuf {
        services_root
            .join(service_name)
            .join(sub_folder)
            .join(format!("{}.{}", file_name, self.extension))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureConfig {
    pub tempdir_prefix: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `layout.extension`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RefdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RefdocConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_layout() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.layout.reference_dir, "reference");
        assert_eq!(config.layout.services_dir, "services");
        assert_eq!(config.layout.extension, "rst");
        assert_eq!(config.fixture.tempdir_prefix, "refdoc-");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("layout.extension", "txt")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.layout.extension, "txt");
        assert_eq!(config.layout.services_dir, "services");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("refdoc.toml");
        fs::write(&path, "[layout]\nservices_dir = \"apis\"\n").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        assert_eq!(config.layout.services_dir, "apis");
        assert_eq!(config.layout.reference_dir, "reference");
    }

    #[test]
    fn optional_file_may_be_absent() {
        let dir = tempdir().unwrap();
        let config = Loader::new()
            .with_optional_file(dir.path().join("missing.toml"))
            .build()
            .unwrap();
        assert_eq!(config, load_defaults().unwrap());
    }

    #[test]
    fn required_file_must_exist() {
        let dir = tempdir().unwrap();
        let result = Loader::new().with_file(dir.path().join("missing.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn builds_conventional_nested_path() {
        let layout = load_defaults().unwrap().layout;
        let root = Path::new("/docs");
        let services_root = layout.services_root(root);
        assert_eq!(services_root, Path::new("/docs/reference/services"));
        assert_eq!(
            layout.nested_file_path(&services_root, "s3", "client", "index"),
            Path::new("/docs/reference/services/s3/client/index.rst")
        );
    }
}
