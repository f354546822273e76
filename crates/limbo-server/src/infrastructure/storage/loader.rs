//! Loading `settings.yml` into a [`LimboConfig`].
//!
//! [`ConfigLoader::load`] runs three stages and stops at the first failure:
//!
//! 1. **Bootstrap** – open `<root>/settings.yml`, seeding it from the bundled
//!    template on first run ([`ResourceBootstrapper`]).
//! 2. **Parse** – read the whole document into a `serde_yaml::Value`.  An
//!    empty file parses as an empty mapping, so every required key reports
//!    missing rather than failing with a syntax error.
//! 3. **Extract** – walk the tree with
//!    [`extract_config`](crate::application::load_config::extract_config).

use std::io::Read;
use std::path::{Path, PathBuf};

use limbo_core::Node;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::bootstrap::{ResourceBootstrapper, SettingsDocument};
use super::template::{BundledTemplates, TemplateSource, SETTINGS_FILE_NAME};
use crate::application::load_config::{extract_config, LoadError};
use crate::domain::config::LimboConfig;

/// Loads the settings document found under a root directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader<S = BundledTemplates> {
    bootstrapper: ResourceBootstrapper<S>,
}

impl ConfigLoader<BundledTemplates> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_templates(root, BundledTemplates)
    }
}

impl<S: TemplateSource> ConfigLoader<S> {
    /// Loader that seeds missing files from `source` instead of the bundle.
    pub fn with_templates(root: impl Into<PathBuf>, source: S) -> Self {
        Self {
            bootstrapper: ResourceBootstrapper::with_templates(root, source),
        }
    }

    /// Where the settings document lives (whether or not it exists yet).
    pub fn settings_path(&self) -> PathBuf {
        self.bootstrapper.root().join(SETTINGS_FILE_NAME)
    }

    /// Bootstraps, parses, and extracts the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] from any stage.
    pub fn load(&self) -> Result<LimboConfig, LoadError> {
        let document = self.bootstrapper.open(SETTINGS_FILE_NAME)?;
        debug!(
            path = %document.path.display(),
            created = document.created,
            "reading settings"
        );

        let value = parse_document(document)?;
        extract_config(&Node::root(&value))
    }
}

/// Loads `<root>/settings.yml` using the bundled template for first-run
/// seeding.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load_config(root: impl AsRef<Path>) -> Result<LimboConfig, LoadError> {
    ConfigLoader::new(root.as_ref()).load()
}

fn parse_document(document: SettingsDocument) -> Result<Value, LoadError> {
    let SettingsDocument {
        path, mut reader, ..
    } = document;

    let mut text = String::new();
    if let Err(source) = reader.read_to_string(&mut text) {
        return Err(LoadError::Io { path, source });
    }

    if text.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    serde_yaml::from_str(&text).map_err(|source| LoadError::Parse { path, source })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::infrastructure::storage::template::MockTemplateSource;

    #[test]
    fn test_first_load_uses_bundled_template_values() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();

        // Act
        let cfg = ConfigLoader::new(dir.path()).load().unwrap();

        // Assert
        assert_eq!(cfg.max_players(), 100);
        assert_eq!(cfg.debug_level(), 3);
        assert_eq!(cfg.dimension_type(), "THE_END");
        assert!(dir.path().join(SETTINGS_FILE_NAME).is_file());
    }

    #[test]
    fn test_settings_path_is_under_root() {
        let loader = ConfigLoader::new("/srv/limbo");
        assert_eq!(loader.settings_path(), Path::new("/srv/limbo/settings.yml"));
    }

    #[test]
    fn test_empty_document_reports_first_missing_key() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE_NAME), "   \n").unwrap();

        // Act
        let err = ConfigLoader::new(dir.path()).load().unwrap_err();

        // Assert
        match err {
            LoadError::MissingRequiredKey { path } => assert_eq!(path.to_string(), "bind"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_yaml_is_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, "bind: [unterminated\n").unwrap();

        let err = ConfigLoader::new(dir.path()).load().unwrap_err();

        match err {
            LoadError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_template_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = MockTemplateSource::new();
        source.expect_template().returning(|_| None);

        let err = ConfigLoader::with_templates(dir.path(), source)
            .load()
            .unwrap_err();

        assert!(matches!(err, LoadError::MissingBundledResource { .. }));
    }

    #[test]
    fn test_load_config_helper_matches_loader() {
        let dir = tempfile::tempdir().unwrap();

        let first = load_config(dir.path()).unwrap();
        let second = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(first, second);
    }
}
