//! Path-addressable view over a parsed settings document.
//!
//! `serde_yaml` produces a [`Value`] tree. [`Node`] wraps a position in that
//! tree together with the path used to reach it, so every getter can report
//! exactly which key was missing or malformed.
//!
//! Nodes are addressable even when the key does not exist in the document.
//! Such a node is *absent*: optional getters return `None`, required getters
//! return [`NodeError::Missing`]. A key whose value is YAML `null` (for
//! example `text:` with nothing after it) is treated as absent as well.
//!
//! ```rust
//! use limbo_core::node::Node;
//!
//! let doc: serde_yaml::Value = serde_yaml::from_str("netty:\n  useEpoll: false\n").unwrap();
//! let root = Node::root(&doc);
//!
//! assert_eq!(root.node(&["netty", "useEpoll"]).get::<bool>(), Ok(false));
//! assert_eq!(root.node(&["netty", "threads", "bossGroup"]).get_or(1i32), Ok(1));
//! ```

use std::fmt;

use serde_yaml::Value;
use thiserror::Error;

use crate::serialize::{Decode, DecodeError};

mod scalar;

pub use scalar::{Scalar, ScalarMismatch};

// ── Paths ─────────────────────────────────────────────────────────────────────

/// Sequence of keys leading from the document root to a node.
///
/// Displayed dot-separated (`netty.threads.bossGroup`); sequence elements
/// show their index (`ping.sample.2`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `key` appended.
    pub fn join(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join("."))
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors produced by the typed getters on [`Node`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NodeError {
    /// A required key is absent (or `null`).
    #[error("missing required key '{path}'")]
    Missing { path: NodePath },

    /// The value exists but has the wrong shape, e.g. a string where an
    /// integer was expected.
    #[error("expected {expected} at '{path}', found {found}")]
    WrongType {
        path: NodePath,
        expected: &'static str,
        found: &'static str,
    },

    /// The value is numeric but does not fit the target type.
    #[error("value {value} at '{path}' is out of range for {target}")]
    OutOfRange {
        path: NodePath,
        value: String,
        target: &'static str,
    },
}

impl NodeError {
    pub fn path(&self) -> &NodePath {
        match self {
            NodeError::Missing { path }
            | NodeError::WrongType { path, .. }
            | NodeError::OutOfRange { path, .. } => path,
        }
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A position in the settings tree.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: Option<&'a Value>,
    path: NodePath,
}

impl<'a> Node<'a> {
    /// Wraps the document root.
    pub fn root(value: &'a Value) -> Self {
        Self {
            value: Some(value),
            path: NodePath::root(),
        }
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// The underlying value, or `None` if the node is absent or `null`.
    pub fn raw(&self) -> Option<&'a Value> {
        self.value.filter(|v| !v.is_null())
    }

    pub fn is_present(&self) -> bool {
        self.raw().is_some()
    }

    /// Short name of the value's YAML kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        self.raw().map_or("nothing", value_kind_name)
    }

    /// Addresses the child `key` of a mapping node.
    ///
    /// Never fails: if this node is absent or is not a mapping, the child is
    /// absent too.
    pub fn child(&self, key: &str) -> Node<'a> {
        let value = self
            .raw()
            .and_then(Value::as_mapping)
            .and_then(|map| map.get(key));
        Node {
            value,
            path: self.path.join(key),
        }
    }

    /// Addresses a descendant by a sequence of keys.
    pub fn node(&self, path: &[&str]) -> Node<'a> {
        path.iter()
            .fold(self.clone(), |node, key| node.child(key))
    }

    /// Reads a required scalar.
    pub fn get<T: Scalar>(&self) -> Result<T, NodeError> {
        self.get_opt()?.ok_or_else(|| NodeError::Missing {
            path: self.path.clone(),
        })
    }

    /// Reads an optional scalar. Absent yields `Ok(None)`; a value of the
    /// wrong kind is still an error.
    pub fn get_opt<T: Scalar>(&self) -> Result<Option<T>, NodeError> {
        let Some(value) = self.raw() else {
            return Ok(None);
        };
        T::from_value(value)
            .map(Some)
            .map_err(|mismatch| self.mismatch_error::<T>(value, mismatch))
    }

    /// Reads an optional scalar, substituting `default` when absent.
    pub fn get_or<T: Scalar>(&self, default: T) -> Result<T, NodeError> {
        Ok(self.get_opt()?.unwrap_or(default))
    }

    /// Reads a list of scalars.
    ///
    /// An absent node yields an empty list and a single scalar yields a
    /// one-element list, so `sample: "hello"` and `sample: ["hello"]` are
    /// equivalent.
    pub fn get_list<T: Scalar>(&self) -> Result<Vec<T>, NodeError> {
        match self.raw() {
            None => Ok(Vec::new()),
            Some(Value::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Node {
                        value: Some(item),
                        path: self.path.join(index.to_string()),
                    }
                    .get::<T>()
                })
                .collect(),
            Some(_) => Ok(vec![self.get::<T>()?]),
        }
    }

    /// Decodes this subtree into a registered domain type.
    pub fn decode<T: Decode>(&self) -> Result<T, DecodeError> {
        T::decode(self)
    }

    fn mismatch_error<T: Scalar>(&self, value: &Value, mismatch: ScalarMismatch) -> NodeError {
        match mismatch {
            ScalarMismatch::WrongType => NodeError::WrongType {
                path: self.path.clone(),
                expected: T::NAME,
                found: value_kind_name(value),
            },
            ScalarMismatch::OutOfRange(value) => NodeError::OutOfRange {
                path: self.path.clone(),
                value,
                target: T::NAME,
            },
        }
    }
}

fn value_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
