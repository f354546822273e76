//! Field extraction: turns a parsed settings tree into a [`LimboConfig`].
//!
//! This is the part of loading that involves no I/O. It walks a fixed set of
//! paths in order and stops at the first failure, so a caller either gets a
//! complete configuration or a single [`LoadError`] naming the offending path.
//!
//! # Field classes
//!
//! - **Required** – `bind`, `maxPlayers`, `ping`, `dimension`,
//!   `spawnPosition`, `gameMode`, `infoForwarding`, `readTimeout`,
//!   `debugLevel`.  Absent → [`LoadError::MissingRequiredKey`].
//!
//! - **Conditional** – `joinMessage.text` and the `bossBar` group.  The
//!   `enable` flag is read first (and is itself required); the value is only
//!   read when the flag is true and is `None` otherwise, whatever else the
//!   group contains.
//!
//! - **Tuning** – `netty.useEpoll`, `netty.threads.bossGroup`,
//!   `netty.threads.workerGroup`.  Absent → hard-coded default.  A present
//!   value of the wrong kind is still an error.

use std::path::PathBuf;

use limbo_core::node::Scalar;
use limbo_core::{colors, BossBar, Decode, DecodeError, Node, NodePath};
use thiserror::Error;
use tracing::debug;

use crate::domain::config::{
    LimboConfig, NettySettings, DEFAULT_BOSS_GROUP_SIZE, DEFAULT_USE_EPOLL,
    DEFAULT_WORKER_GROUP_SIZE,
};

/// Every way loading the settings can fail.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The settings file is absent and no bundled template exists to seed it.
    #[error("cannot find bundled settings resource '{name}'")]
    MissingBundledResource { name: String },

    /// Creating, copying, or reading the settings file failed.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid YAML.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required key is absent from the document.
    #[error("missing required key '{path}'")]
    MissingRequiredKey { path: NodePath },

    /// A value is present but could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl LoadError {
    /// Document path the error refers to, if it is about a specific key.
    pub fn key_path(&self) -> Option<&NodePath> {
        match self {
            LoadError::MissingRequiredKey { path } => Some(path),
            LoadError::Decode(err) => Some(&err.path),
            _ => None,
        }
    }
}

/// Extracts the full configuration from the document root.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered; no partial configuration is
/// ever produced.
pub fn extract_config(root: &Node<'_>) -> Result<LimboConfig, LoadError> {
    let address = group(root, "bind")?;
    let max_players = required_scalar(root, &["maxPlayers"])?;
    let ping_data = group(root, "ping")?;
    let dimension_type = required_scalar(root, &["dimension"])?;
    let spawn_position = group(root, "spawnPosition")?;
    let game_mode = required_scalar(root, &["gameMode"])?;

    let join_message = conditional(root, "joinMessage", |node| {
        let text: String = required_scalar(node, &["text"])?;
        Ok(colors::expand(&text))
    })?;
    let boss_bar = conditional(root, "bossBar", |node| Ok(node.decode::<BossBar>()?))?;

    let info_forwarding = group(root, "infoForwarding")?;
    let read_timeout = required_scalar(root, &["readTimeout"])?;
    let debug_level = required_scalar(root, &["debugLevel"])?;

    let netty = NettySettings {
        use_epoll: tuning(root, &["netty", "useEpoll"], DEFAULT_USE_EPOLL)?,
        boss_group_size: tuning(
            root,
            &["netty", "threads", "bossGroup"],
            DEFAULT_BOSS_GROUP_SIZE,
        )?,
        worker_group_size: tuning(
            root,
            &["netty", "threads", "workerGroup"],
            DEFAULT_WORKER_GROUP_SIZE,
        )?,
    };

    Ok(LimboConfig {
        address,
        max_players,
        ping_data,
        dimension_type,
        spawn_position,
        game_mode,
        join_message,
        boss_bar,
        info_forwarding,
        read_timeout,
        debug_level,
        netty,
    })
}

// ── Extraction helpers ────────────────────────────────────────────────────────

/// Addresses `path` under `root`, failing if nothing is there.
fn required<'a>(root: &Node<'a>, path: &[&str]) -> Result<Node<'a>, LoadError> {
    let node = root.node(path);
    if node.is_present() {
        Ok(node)
    } else {
        Err(LoadError::MissingRequiredKey {
            path: node.path().clone(),
        })
    }
}

fn required_scalar<T: Scalar>(root: &Node<'_>, path: &[&str]) -> Result<T, LoadError> {
    required(root, path)?
        .get::<T>()
        .map_err(|e| LoadError::from(DecodeError::scalar::<T>(e)))
}

fn group<T: Decode>(root: &Node<'_>, key: &str) -> Result<T, LoadError> {
    Ok(required(root, &[key])?.decode::<T>()?)
}

fn tuning<T: Scalar>(root: &Node<'_>, path: &[&str], default: T) -> Result<T, LoadError> {
    root.node(path)
        .get_or(default)
        .map_err(|e| LoadError::from(DecodeError::scalar::<T>(e)))
}

/// Reads `<key>.enable`, then runs `extract` on the group only if it is true.
fn conditional<'a, T>(
    root: &Node<'a>,
    key: &str,
    extract: impl FnOnce(&Node<'a>) -> Result<T, LoadError>,
) -> Result<Option<T>, LoadError> {
    let enabled: bool = required_scalar(root, &[key, "enable"])?;
    if !enabled {
        debug!(group = key, "disabled, skipping");
        return Ok(None);
    }
    extract(&root.child(key)).map(Some)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
