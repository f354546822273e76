//! `spawnPosition` decoder.

use crate::domain::Position;
use crate::node::{Node, NodeError};

use super::DecodeError;

pub(super) fn decode(node: &Node<'_>) -> Result<Position, DecodeError> {
    let fail = |e: NodeError| DecodeError::of::<Position>(node, e);
    let coord = |key: &str| node.child(key).get::<f64>().map_err(fail);

    let (x, y, z) = (coord("x")?, coord("y")?, coord("z")?);
    let yaw = node.child("yaw").get_or(0.0f32).map_err(fail)?;
    let pitch = node.child("pitch").get_or(0.0f32).map_err(fail)?;

    Ok(Position::new(x, y, z).with_rotation(yaw, pitch))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
