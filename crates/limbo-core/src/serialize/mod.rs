//! Decoder registry: typed values built from settings subtrees.
//!
//! The set of decodable types is closed. [`ValueKind`] names each one and
//! [`decode`] dispatches on it; typed callers use [`Decode`] through
//! [`Node::decode`](crate::node::Node::decode) instead. Both routes end in the
//! same per-type function.
//!
//! The server's loader knows each group's type statically and goes through
//! [`Decode`]. [`decode`] is the untyped entry point for callers that pick
//! the kind at run time, such as tooling that validates one group of a
//! document by name.
//!
//! A decoder receives the node at which its group is rooted and only reads
//! that node's descendants, so each one can be tested against a small YAML
//! snippet on its own.
//!
//! | Kind             | Type                  | Shape                         |
//! |------------------|-----------------------|-------------------------------|
//! | `Address`        | [`AddressSpec`]       | scalar string or `{ip, port}` |
//! | `InfoForwarding` | [`InfoForwarding`]    | `{mode, secret?, tokens?}`    |
//! | `PingData`       | [`PingData`]          | `{version, description, ...}` |
//! | `BossBar`        | [`BossBar`]           | `{text, health, color, ...}`  |
//! | `Position`       | [`Position`]          | `{x, y, z, yaw?, pitch?}`     |

use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::domain::{AddressSpec, BossBar, InfoForwarding, PingData, Position};
use crate::node::{Node, NodeError, NodePath, Scalar};

mod address;
mod boss_bar;
mod forwarding;
mod ping;
mod position;

// ── Registry ──────────────────────────────────────────────────────────────────

/// Every type the registry can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Address,
    InfoForwarding,
    PingData,
    BossBar,
    Position,
}

impl ValueKind {
    pub const ALL: [ValueKind; 5] = [
        ValueKind::Address,
        ValueKind::InfoForwarding,
        ValueKind::PingData,
        ValueKind::BossBar,
        ValueKind::Position,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Address => "AddressSpec",
            ValueKind::InfoForwarding => "InfoForwarding",
            ValueKind::PingData => "PingData",
            ValueKind::BossBar => "BossBar",
            ValueKind::Position => "Position",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of [`decode`]: one variant per [`ValueKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Address(AddressSpec),
    InfoForwarding(InfoForwarding),
    PingData(PingData),
    BossBar(BossBar),
    Position(Position),
}

impl DecodedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            DecodedValue::Address(_) => ValueKind::Address,
            DecodedValue::InfoForwarding(_) => ValueKind::InfoForwarding,
            DecodedValue::PingData(_) => ValueKind::PingData,
            DecodedValue::BossBar(_) => ValueKind::BossBar,
            DecodedValue::Position(_) => ValueKind::Position,
        }
    }
}

/// Decodes the subtree at `node` as `kind`.
///
/// # Errors
///
/// Returns [`DecodeError`] when a required field is missing, a scalar has the
/// wrong kind, or a value is outside its allowed set.
pub fn decode(kind: ValueKind, node: &Node<'_>) -> Result<DecodedValue, DecodeError> {
    trace!(%kind, path = %node.path(), "decoding");
    match kind {
        ValueKind::Address => address::decode(node).map(DecodedValue::Address),
        ValueKind::InfoForwarding => forwarding::decode(node).map(DecodedValue::InfoForwarding),
        ValueKind::PingData => ping::decode(node).map(DecodedValue::PingData),
        ValueKind::BossBar => boss_bar::decode(node).map(DecodedValue::BossBar),
        ValueKind::Position => position::decode(node).map(DecodedValue::Position),
    }
}

/// Statically-typed access to the registry.
pub trait Decode: Sized {
    const KIND: ValueKind;

    fn decode(node: &Node<'_>) -> Result<Self, DecodeError>;
}

impl Decode for AddressSpec {
    const KIND: ValueKind = ValueKind::Address;

    fn decode(node: &Node<'_>) -> Result<Self, DecodeError> {
        address::decode(node)
    }
}

impl Decode for InfoForwarding {
    const KIND: ValueKind = ValueKind::InfoForwarding;

    fn decode(node: &Node<'_>) -> Result<Self, DecodeError> {
        forwarding::decode(node)
    }
}

impl Decode for PingData {
    const KIND: ValueKind = ValueKind::PingData;

    fn decode(node: &Node<'_>) -> Result<Self, DecodeError> {
        ping::decode(node)
    }
}

impl Decode for BossBar {
    const KIND: ValueKind = ValueKind::BossBar;

    fn decode(node: &Node<'_>) -> Result<Self, DecodeError> {
        boss_bar::decode(node)
    }
}

impl Decode for Position {
    const KIND: ValueKind = ValueKind::Position;

    fn decode(node: &Node<'_>) -> Result<Self, DecodeError> {
        position::decode(node)
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// A subtree (or a single scalar) could not be decoded.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("cannot decode {target} at '{path}': {cause}")]
pub struct DecodeError {
    /// Name of the type being produced (`PingData`, `integer`, ...).
    pub target: &'static str,
    /// Root of the subtree being decoded.
    pub path: NodePath,
    pub cause: DecodeCause,
}

/// The field-level reason behind a [`DecodeError`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeCause {
    #[error(transparent)]
    Node(#[from] NodeError),

    /// The value is well-formed YAML but not an acceptable value.
    #[error("invalid value at '{path}': {reason}")]
    Invalid { path: NodePath, reason: String },
}

impl DecodeCause {
    pub fn invalid(path: &NodePath, reason: impl fmt::Display) -> Self {
        DecodeCause::Invalid {
            path: path.clone(),
            reason: reason.to_string(),
        }
    }

    /// Path of the offending field (which may be deeper than the subtree root).
    pub fn path(&self) -> &NodePath {
        match self {
            DecodeCause::Node(err) => err.path(),
            DecodeCause::Invalid { path, .. } => path,
        }
    }
}

impl DecodeError {
    /// Error for a registered type `T` rooted at `node`.
    pub fn of<T: Decode>(node: &Node<'_>, cause: impl Into<DecodeCause>) -> Self {
        Self {
            target: T::KIND.name(),
            path: node.path().clone(),
            cause: cause.into(),
        }
    }

    /// Error for a plain scalar read, e.g. a non-numeric `gameMode`.
    pub fn scalar<T: Scalar>(err: NodeError) -> Self {
        Self {
            target: T::NAME,
            path: err.path().clone(),
            cause: DecodeCause::Node(err),
        }
    }

    /// `true` when the failure is simply that a required key is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self.cause, DecodeCause::Node(NodeError::Missing { .. }))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
bind: "localhost:65535"
ping:
  version: NanoLimbo
  description: "&9NanoLimbo"
spawnPosition: { x: 0, y: 64.5, z: 0 }
bossBar:
  text: "&eWelcome"
  health: 1.0
  color: PINK
  overlay: SOLID
infoForwarding:
  mode: NONE
"#;

    fn doc() -> serde_yaml::Value {
        serde_yaml::from_str(FULL).unwrap()
    }

    #[test]
    fn test_dispatch_produces_matching_variant_for_every_kind() {
        let value = doc();
        let root = Node::root(&value);
        let paths = [
            (ValueKind::Address, "bind"),
            (ValueKind::InfoForwarding, "infoForwarding"),
            (ValueKind::PingData, "ping"),
            (ValueKind::BossBar, "bossBar"),
            (ValueKind::Position, "spawnPosition"),
        ];

        for (kind, key) in paths {
            let decoded = decode(kind, &root.child(key)).expect("fixture must decode");
            assert_eq!(decoded.kind(), kind);
        }
    }

    #[test]
    fn test_dispatch_and_trait_agree() {
        let value = doc();
        let node = Node::root(&value).child("spawnPosition");
        let via_registry = decode(ValueKind::Position, &node).unwrap();
        let via_trait: Position = node.decode().unwrap();
        assert_eq!(via_registry, DecodedValue::Position(via_trait));
    }

    #[test]
    fn test_all_kinds_have_distinct_names() {
        let mut names: Vec<_> = ValueKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ValueKind::ALL.len());
    }

    #[test]
    fn test_scalar_error_names_scalar_type() {
        let value: serde_yaml::Value = serde_yaml::from_str("gameMode: creative").unwrap();
        let err = Node::root(&value)
            .child("gameMode")
            .get::<i32>()
            .map_err(DecodeError::scalar::<i32>)
            .unwrap_err();
        assert_eq!(err.target, "integer");
        assert_eq!(err.path.to_string(), "gameMode");
        assert!(!err.is_missing());
    }

    #[test]
    fn test_decode_error_message_names_type_and_field() {
        let value: serde_yaml::Value = serde_yaml::from_str("ping: { version: x }").unwrap();
        let err = Node::root(&value).child("ping").decode::<PingData>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PingData"), "{message}");
        assert!(message.contains("ping.description"), "{message}");
    }
}
