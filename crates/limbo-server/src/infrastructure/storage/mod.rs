//! Storage infrastructure: the on-disk settings document.
//!
//! - **`template`**  – Templates compiled into the binary and the
//!   [`TemplateSource`](template::TemplateSource) seam used to look them up.
//! - **`bootstrap`** – Seeds `settings.yml` from its template on first run.
//! - **`loader`**    – Bootstrap, parse, and extract in one call.

pub mod bootstrap;
pub mod loader;
pub mod template;

pub use loader::{load_config, ConfigLoader};
