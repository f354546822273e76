//! Infrastructure layer for the limbo server.
//!
//! Contains OS-facing adapters: the settings file on disk and the global
//! logging subscriber.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain`, and
//! `limbo_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod logging;
pub mod storage;
