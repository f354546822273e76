//! Bundled settings templates.
//!
//! The default `settings.yml` is compiled into the binary so a fresh install
//! can seed its working directory without any files shipped alongside it.

/// File name of the settings document, both on disk and in the bundle.
pub const SETTINGS_FILE_NAME: &str = "settings.yml";

/// Default settings document, with comments, exactly as it is written to disk.
pub const DEFAULT_SETTINGS: &str = include_str!("../../../resources/settings.yml");

/// Source of bundled template files, looked up by name.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource {
    /// Raw bytes of the template called `name`, or `None` if there is none.
    fn template(&self, name: &str) -> Option<Vec<u8>>;
}

/// Templates compiled into this binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl TemplateSource for BundledTemplates {
    fn template(&self, name: &str) -> Option<Vec<u8>> {
        match name {
            SETTINGS_FILE_NAME => Some(DEFAULT_SETTINGS.as_bytes().to_vec()),
            _ => None,
        }
    }
}
