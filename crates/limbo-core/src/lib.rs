//! # limbo-core
//!
//! Settings decoding for the limbo server: a path-addressable view over the
//! parsed YAML document, the registry of typed decoders, and the domain values
//! they produce.
//!
//! This crate does no file or network I/O. The server crate finds the
//! settings file, parses it with `serde_yaml`, and hands the resulting tree
//! to the types defined here.
//!
//! # Modules
//!
//! - **`node`** – [`Node`] wraps a `serde_yaml::Value` together with the path
//!   used to reach it.  Typed getters (`get`, `get_opt`, `get_or`) report
//!   missing keys and wrong kinds with the full dotted path.
//!
//! - **`serialize`** – The decoder registry.  [`ValueKind`] is the closed set
//!   of decodable group types; [`decode`] dispatches on it and [`Decode`]
//!   offers the same decoders with static typing.
//!
//! - **`domain`** – Bind address, ping payload, spawn position, boss bar and
//!   forwarding mode.
//!
//! - **`colors`** – `&`-prefixed color code expansion.

pub mod colors;
pub mod domain;
pub mod node;
pub mod serialize;

pub use domain::{
    AddressSpec, BossBar, BossBarColor, BossBarOverlay, ForwardingMode, InfoForwarding, PingData,
    Position,
};
pub use node::{Node, NodeError, NodePath};
pub use serialize::{decode, Decode, DecodeCause, DecodeError, DecodedValue, ValueKind};
