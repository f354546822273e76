//! The loaded server configuration.
//!
//! [`LimboConfig`] is built once by
//! [`ConfigLoader`](crate::infrastructure::storage::loader::ConfigLoader) and
//! then only read. There are no setters: to change the configuration, load a
//! new one. Pass it to consumers explicitly (by reference or inside an `Arc`);
//! it is `Send + Sync` and every accessor is a plain field read.
//!
//! # Example
//!
//! ```rust
//! use limbo_server::infrastructure::storage::loader::ConfigLoader;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = ConfigLoader::new(dir.path()).load().unwrap();
//!
//! // Values from the bundled template written on first run:
//! assert_eq!(config.max_players(), 100);
//! assert_eq!(config.debug_level(), 3);
//! assert!(config.use_epoll());
//! ```

use std::time::Duration;

use limbo_core::{AddressSpec, BossBar, InfoForwarding, PingData, Position};
use serde::{Serialize, Serializer};

/// Defaults applied when the `netty` section omits a value.
pub const DEFAULT_USE_EPOLL: bool = true;
pub const DEFAULT_BOSS_GROUP_SIZE: u32 = 1;
pub const DEFAULT_WORKER_GROUP_SIZE: u32 = 4;

/// Every value read from `settings.yml`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimboConfig {
    #[serde(rename = "bind", serialize_with = "as_display")]
    pub(crate) address: AddressSpec,
    pub(crate) max_players: i32,
    #[serde(rename = "ping")]
    pub(crate) ping_data: PingData,
    #[serde(rename = "dimension")]
    pub(crate) dimension_type: String,
    pub(crate) spawn_position: Position,
    pub(crate) game_mode: i32,
    /// Present only when `joinMessage.enable` is true.
    pub(crate) join_message: Option<String>,
    /// Present only when `bossBar.enable` is true.
    pub(crate) boss_bar: Option<BossBar>,
    pub(crate) info_forwarding: InfoForwarding,
    /// Milliseconds.
    pub(crate) read_timeout: i64,
    pub(crate) debug_level: i32,
    pub(crate) netty: NettySettings,
}

/// Network transport tuning. Always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NettySettings {
    pub use_epoll: bool,
    pub boss_group_size: u32,
    pub worker_group_size: u32,
}

impl Default for NettySettings {
    fn default() -> Self {
        Self {
            use_epoll: DEFAULT_USE_EPOLL,
            boss_group_size: DEFAULT_BOSS_GROUP_SIZE,
            worker_group_size: DEFAULT_WORKER_GROUP_SIZE,
        }
    }
}

impl LimboConfig {
    pub fn address(&self) -> &AddressSpec {
        &self.address
    }

    pub fn max_players(&self) -> i32 {
        self.max_players
    }

    pub fn ping_data(&self) -> &PingData {
        &self.ping_data
    }

    pub fn dimension_type(&self) -> &str {
        &self.dimension_type
    }

    pub fn spawn_position(&self) -> &Position {
        &self.spawn_position
    }

    pub fn game_mode(&self) -> i32 {
        self.game_mode
    }

    /// Join message with color codes expanded, or `None` when disabled.
    pub fn join_message(&self) -> Option<&str> {
        self.join_message.as_deref()
    }

    pub fn uses_join_message(&self) -> bool {
        self.join_message.is_some()
    }

    /// Boss bar, or `None` when disabled.
    pub fn boss_bar(&self) -> Option<&BossBar> {
        self.boss_bar.as_ref()
    }

    pub fn uses_boss_bar(&self) -> bool {
        self.boss_bar.is_some()
    }

    pub fn info_forwarding(&self) -> &InfoForwarding {
        &self.info_forwarding
    }

    /// Raw `readTimeout` value in milliseconds, as written in the document.
    pub fn read_timeout_millis(&self) -> i64 {
        self.read_timeout
    }

    /// `readTimeout` as a duration. Negative values clamp to zero.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.read_timeout).unwrap_or(0))
    }

    pub fn debug_level(&self) -> i32 {
        self.debug_level
    }

    pub fn netty(&self) -> &NettySettings {
        &self.netty
    }

    pub fn use_epoll(&self) -> bool {
        self.netty.use_epoll
    }

    pub fn boss_group_size(&self) -> u32 {
        self.netty.boss_group_size
    }

    pub fn worker_group_size(&self) -> u32 {
        self.netty.worker_group_size
    }
}

fn as_display<S: Serializer>(address: &AddressSpec, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(address)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
