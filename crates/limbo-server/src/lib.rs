//! limbo-server library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::load_config::LoadError;
pub use domain::config::LimboConfig;
pub use infrastructure::storage::{load_config, ConfigLoader};
