//! Server-list ping payload.

use serde::Serialize;

/// Protocol number meaning "answer with whatever protocol the client sent".
pub const MIRROR_CLIENT_PROTOCOL: i32 = -1;

/// What the server shows in a client's multiplayer server list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PingData {
    /// Version label displayed next to the player count.
    pub version: String,
    /// Protocol number reported to clients, or [`MIRROR_CLIENT_PROTOCOL`].
    pub protocol: i32,
    /// MOTD, with color codes already expanded.
    pub description: String,
    /// Lines shown when hovering over the player count.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sample: Vec<String>,
    /// Favicon reference (file path or `data:` URI), passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl PingData {
    /// Returns `true` when the server echoes the client's protocol number.
    pub fn mirrors_client_protocol(&self) -> bool {
        self.protocol == MIRROR_CLIENT_PROTOCOL
    }
}
