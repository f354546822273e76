//! First-run seeding of the settings document.
//!
//! [`ResourceBootstrapper::open`] returns a reader over `<root>/<name>`.  When
//! the file does not exist yet, the bundled template of the same name is
//! copied there first, byte for byte, so the operator gets the commented
//! default file to edit.
//!
//! The copy goes to a uniquely named hidden temporary file in the same
//! directory, is synced, and is then moved to the final name only if nothing
//! is there yet.  A crash mid-copy leaves at worst a stray
//! `.settings.yml.XXXXXX.tmp`, never a truncated `settings.yml`.  A file that
//! appears while the copy is in flight (an operator, another instance sharing
//! the root) wins over the template and is never written to.

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::{debug, info};

use super::template::{BundledTemplates, TemplateSource};
use crate::application::load_config::LoadError;

/// An opened settings document.
#[derive(Debug)]
pub struct SettingsDocument {
    /// Absolute or root-relative path of the document on disk.
    pub path: PathBuf,
    /// `true` when the file was seeded from the bundled template by this call.
    pub created: bool,
    pub reader: BufReader<File>,
}

/// Locates a document under `root`, seeding it from a template when absent.
#[derive(Debug, Clone)]
pub struct ResourceBootstrapper<S = BundledTemplates> {
    root: PathBuf,
    source: S,
}

impl ResourceBootstrapper<BundledTemplates> {
    /// Bootstrapper backed by the templates compiled into this binary.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_templates(root, BundledTemplates)
    }
}

impl<S: TemplateSource> ResourceBootstrapper<S> {
    pub fn with_templates(root: impl Into<PathBuf>, source: S) -> Self {
        Self {
            root: root.into(),
            source,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Opens `<root>/<name>`, copying the bundled template there first if
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// - [`LoadError::MissingBundledResource`] if the file is absent and the
    ///   template source has nothing called `name`.
    /// - [`LoadError::Io`] if creating the directory, writing the copy, or
    ///   opening the file fails.
    pub fn open(&self, name: &str) -> Result<SettingsDocument, LoadError> {
        let path = self.root.join(name);

        let exists = path.try_exists().map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        let created = !exists && self.seed(name, &path)?;
        if created {
            info!(path = %path.display(), "created default settings file");
        } else {
            debug!(path = %path.display(), "using existing settings file");
        }

        let file = File::open(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(SettingsDocument {
            path,
            created,
            reader: BufReader::new(file),
        })
    }

    /// Copies the template for `name` to `path`.  Returns `false` when
    /// another writer created `path` first; that file is left untouched.
    fn seed(&self, name: &str, path: &Path) -> Result<bool, LoadError> {
        let bytes = self
            .source
            .template(name)
            .ok_or_else(|| LoadError::MissingBundledResource {
                name: name.to_string(),
            })?;

        fs::create_dir_all(&self.root).map_err(|source| LoadError::Io {
            path: self.root.clone(),
            source,
        })?;

        let prefix = format!(".{name}.");
        let mut tmp = Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(&self.root)
            .map_err(|source| LoadError::Io {
                path: self.root.clone(),
                source,
            })?;

        // The temporary file is deleted when `tmp` drops on any early return.
        let written = tmp.write_all(&bytes).and_then(|()| tmp.as_file().sync_all());
        if let Err(source) = written {
            return Err(LoadError::Io {
                path: tmp.path().to_path_buf(),
                source,
            });
        }

        match tmp.persist_noclobber(path) {
            Ok(_) => Ok(true),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "settings file appeared during bootstrap, keeping it");
                Ok(false)
            }
            Err(e) => Err(LoadError::Io {
                path: path.to_path_buf(),
                source: e.error,
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
