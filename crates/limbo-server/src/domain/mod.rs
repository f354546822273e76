//! Domain types owned by the server crate.
//!
//! The individual setting values (address, ping data, boss bar, ...) live in
//! `limbo_core::domain`; this module holds the aggregate built from them.

pub mod config;

pub use config::{LimboConfig, NettySettings};
