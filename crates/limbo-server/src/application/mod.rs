//! Application layer use cases for the limbo server.
//!
//! Code here turns an already-parsed settings document into a validated
//! [`LimboConfig`](crate::domain::config::LimboConfig).  It does no file
//! system access; reading and seeding `settings.yml` live in
//! [`infrastructure::storage`](crate::infrastructure::storage).
//!
//! # Sub-modules
//!
//! - **`load_config`** – Field extraction rules (required, conditional, and
//!   tuning fields) plus the [`LoadError`](load_config::LoadError) type shared
//!   by every stage of loading.

pub mod load_config;
