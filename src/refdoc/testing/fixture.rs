//! Scoped documentation output tree
//!
//! A [DocFixture] owns a fresh temporary directory that stands in for the
//! generator's output root. Generated pages live at
//! `<root>/reference/services/<service>/<sub_folder>/<file_name>.rst`.
//!
//! The directory is removed when the fixture is dropped, so cleanup happens on
//! every exit path of a test, panics included. [DocFixture::teardown] does the
//! same removal explicitly and reports errors.
//!
//! Each fixture has its own uniquely named directory; tests running in parallel
//! never share one.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

use super::blocks;
use super::ordering;
use crate::refdoc::config::{load_defaults, LayoutConfig, RefdocConfig};
use crate::refdoc::error::FixtureError;

#[derive(Debug)]
pub struct DocFixture {
    dir: TempDir,
    services_root: PathBuf,
    layout: LayoutConfig,
}

impl DocFixture {
    /// Create a fixture with the default layout.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[track_caller]
    pub fn setup() -> Self {
        match Self::try_setup() {
            Ok(fixture) => fixture,
            Err(err) => panic!("Failed to set up documentation fixture: {}", err),
        }
    }

    /// Create a fixture with the default layout, returning errors.
    pub fn try_setup() -> Result<Self, FixtureError> {
        let config = load_defaults()?;
        Self::with_config(&config)
    }

    /// Create a fixture using a loaded configuration.
    pub fn with_config(config: &RefdocConfig) -> Result<Self, FixtureError> {
        let dir = tempfile::Builder::new()
            .prefix(&config.fixture.tempdir_prefix)
            .tempdir()?;
        let services_root = config.layout.services_root(dir.path());
        debug!(root = %dir.path().display(), "created documentation fixture");

        Ok(Self {
            dir,
            services_root,
            layout: config.layout.clone(),
        })
    }

    /// Remove the fixture directory and everything under it.
    pub fn teardown(self) -> Result<(), FixtureError> {
        let root = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!(root = %root.display(), "removed documentation fixture");
        Ok(())
    }

    /// The documentation root handed to the generator
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `<root>/reference/services`
    pub fn services_root(&self) -> &Path {
        &self.services_root
    }

    /// Path of a generated page, whether or not it exists yet.
    pub fn nested_file_path(&self, service_name: &str, sub_folder: &str, file_name: &str) -> PathBuf {
        self.layout
            .nested_file_path(&self.services_root, service_name, sub_folder, file_name)
    }

    /// Read a generated page as UTF-8 text.
    ///
    /// A missing file surfaces as [FixtureError::Io] with
    /// [std::io::ErrorKind::NotFound]; see [FixtureError::is_not_found].
    pub fn get_nested_file_contents(
        &self,
        service_name: &str,
        sub_folder: &str,
        file_name: &str,
    ) -> Result<String, FixtureError> {
        let path = self.nested_file_path(service_name, sub_folder, file_name);
        debug!(path = %path.display(), "reading generated page");
        let bytes = fs::read(&path)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Write a page into the tree, creating parent directories.
    ///
    /// Stands in for the generator when a test needs hand-written output.
    pub fn write_nested_file(
        &self,
        service_name: &str,
        sub_folder: &str,
        file_name: &str,
        contents: &str,
    ) -> Result<PathBuf, FixtureError> {
        let path = self.nested_file_path(service_name, sub_folder, file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote page into fixture");
        Ok(path)
    }

    // ===== Block helpers =====

    #[track_caller]
    pub fn assert_contains_lines_in_order<S: AsRef<str>>(&self, lines: &[S], contents: &str) {
        ordering::assert_contains_lines_in_order(lines, contents)
    }

    #[track_caller]
    pub fn get_class_document_block<'a>(&self, class_name: &str, contents: &'a str) -> &'a str {
        blocks::get_class_document_block(class_name, contents)
    }

    #[track_caller]
    pub fn get_method_document_block<'a>(&self, method_name: &str, contents: &'a str) -> &'a str {
        blocks::get_method_document_block(method_name, contents)
    }

    #[track_caller]
    pub fn get_request_syntax_document_block<'a>(&self, contents: &'a str) -> &'a str {
        blocks::get_request_syntax_document_block(contents)
    }

    #[track_caller]
    pub fn get_response_syntax_document_block<'a>(&self, contents: &'a str) -> &'a str {
        blocks::get_response_syntax_document_block(contents)
    }

    #[track_caller]
    pub fn get_request_parameter_document_block<'a>(
        &self,
        param_name: &str,
        contents: &'a str,
    ) -> &'a str {
        blocks::get_request_parameter_document_block(param_name, contents)
    }

    #[track_caller]
    pub fn get_response_parameter_document_block<'a>(
        &self,
        param_name: &str,
        contents: &'a str,
    ) -> &'a str {
        blocks::get_response_parameter_document_block(param_name, contents)
    }
}
