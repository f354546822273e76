//! Domain values decoded from the settings document.
//!
//! Everything here is plain data: no file access, no knowledge of the node
//! tree. The decoders in [`crate::serialize`] build these values from a
//! subtree; the server crate assembles them into its configuration model.

use thiserror::Error;

pub mod address;
pub mod boss_bar;
pub mod forwarding;
pub mod ping;
pub mod position;

pub use address::{AddressParseError, AddressSpec};
pub use boss_bar::{BossBar, BossBarColor, BossBarOverlay};
pub use forwarding::{ForwardingMode, InfoForwarding};
pub use ping::PingData;
pub use position::Position;

/// A name that does not match any member of a closed enumeration.
#[derive(Debug, Error, PartialEq)]
#[error("unknown {what} '{name}', expected one of: {expected}")]
pub struct UnknownName {
    pub what: &'static str,
    pub name: String,
    pub expected: &'static str,
}

/// Normalises an enumeration name for matching: `dashed-6` and `Dashed_6`
/// both become `DASHED_6`.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().replace('-', "_").to_ascii_uppercase()
}
