//! `ping` decoder.

use crate::colors;
use crate::domain::ping::{PingData, MIRROR_CLIENT_PROTOCOL};
use crate::node::{Node, NodeError};

use super::DecodeError;

pub(super) fn decode(node: &Node<'_>) -> Result<PingData, DecodeError> {
    let fail = |e: NodeError| DecodeError::of::<PingData>(node, e);

    let version = node.child("version").get::<String>().map_err(fail)?;
    let description = node.child("description").get::<String>().map_err(fail)?;
    let protocol = node
        .child("protocol")
        .get_or(MIRROR_CLIENT_PROTOCOL)
        .map_err(fail)?;
    let sample = node.child("sample").get_list::<String>().map_err(fail)?;
    let favicon = node.child("favicon").get_opt::<String>().map_err(fail)?;

    Ok(PingData {
        version,
        protocol,
        description: colors::expand(&description),
        sample: sample.iter().map(|line| colors::expand(line)).collect(),
        favicon,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
