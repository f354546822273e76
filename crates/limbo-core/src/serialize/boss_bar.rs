//! `bossBar` decoder.
//!
//! The group also carries the `enable` flag, which belongs to the loader and
//! is ignored here.

use std::str::FromStr;

use crate::colors;
use crate::domain::{BossBar, BossBarColor, BossBarOverlay, UnknownName};
use crate::node::Node;

use super::{DecodeCause, DecodeError};

pub(super) fn decode(node: &Node<'_>) -> Result<BossBar, DecodeError> {
    let fail = |cause: DecodeCause| DecodeError::of::<BossBar>(node, cause);

    let text = node
        .child("text")
        .get::<String>()
        .map_err(|e| fail(e.into()))?;

    let health_node = node.child("health");
    let health = health_node.get::<f32>().map_err(|e| fail(e.into()))?;
    if !(0.0..=1.0).contains(&health) {
        return Err(fail(DecodeCause::invalid(
            health_node.path(),
            format!("health must be between 0.0 and 1.0, got {health}"),
        )));
    }

    let color: BossBarColor = named(&node.child("color")).map_err(fail)?;

    // `division` is the key used by older settings files.
    let mut overlay_node = node.child("overlay");
    if !overlay_node.is_present() {
        overlay_node = node.child("division");
    }
    let overlay: BossBarOverlay = named(&overlay_node).map_err(fail)?;

    Ok(BossBar {
        text: colors::expand(&text),
        health,
        color,
        overlay,
    })
}

/// Reads a required string and parses it as an enumeration name.
fn named<T>(node: &Node<'_>) -> Result<T, DecodeCause>
where
    T: FromStr<Err = UnknownName>,
{
    let name = node.get::<String>().map_err(DecodeCause::from)?;
    name.parse::<T>()
        .map_err(|e| DecodeCause::invalid(node.path(), e))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
