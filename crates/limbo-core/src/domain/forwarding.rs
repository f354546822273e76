//! Player info forwarding from a proxy in front of the limbo.
//!
//! Proxies (BungeeCord, Velocity) can pass the real player identity through
//! to backend servers. Each strategy needs different parameters, so the
//! configuration is a sum type: a variant carries only what its mode needs.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{normalize_name, UnknownName};

/// The closed set of forwarding strategies, without their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForwardingMode {
    None,
    Legacy,
    Modern,
    BungeeGuard,
}

impl ForwardingMode {
    pub const ALL: [ForwardingMode; 4] = [
        ForwardingMode::None,
        ForwardingMode::Legacy,
        ForwardingMode::Modern,
        ForwardingMode::BungeeGuard,
    ];

    /// Canonical document spelling.
    pub fn name(self) -> &'static str {
        match self {
            ForwardingMode::None => "NONE",
            ForwardingMode::Legacy => "LEGACY",
            ForwardingMode::Modern => "MODERN",
            ForwardingMode::BungeeGuard => "BUNGEE_GUARD",
        }
    }
}

impl fmt::Display for ForwardingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ForwardingMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "NONE" => Ok(ForwardingMode::None),
            "LEGACY" => Ok(ForwardingMode::Legacy),
            "MODERN" => Ok(ForwardingMode::Modern),
            "BUNGEE_GUARD" | "BUNGEEGUARD" => Ok(ForwardingMode::BungeeGuard),
            _ => Err(UnknownName {
                what: "forwarding mode",
                name: s.to_string(),
                expected: "NONE, LEGACY, MODERN, BUNGEE_GUARD",
            }),
        }
    }
}

/// Forwarding strategy together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfoForwarding {
    /// No forwarding; players keep offline-mode identities.
    None,
    /// BungeeCord IP forwarding through the handshake host field.
    Legacy,
    /// Velocity modern forwarding, authenticated with a shared secret.
    Modern {
        #[serde(serialize_with = "redacted")]
        secret: String,
    },
    /// BungeeGuard: legacy forwarding plus a token allow-list.
    BungeeGuard {
        #[serde(serialize_with = "redacted_list")]
        tokens: Vec<String>,
    },
}

impl InfoForwarding {
    pub fn mode(&self) -> ForwardingMode {
        match self {
            InfoForwarding::None => ForwardingMode::None,
            InfoForwarding::Legacy => ForwardingMode::Legacy,
            InfoForwarding::Modern { .. } => ForwardingMode::Modern,
            InfoForwarding::BungeeGuard { .. } => ForwardingMode::BungeeGuard,
        }
    }

    /// Shared secret for modern forwarding.
    pub fn secret(&self) -> Option<&str> {
        match self {
            InfoForwarding::Modern { secret } => Some(secret),
            _ => None,
        }
    }

    /// Returns `true` if `token` is on the BungeeGuard allow-list.
    pub fn accepts_token(&self, token: &str) -> bool {
        match self {
            InfoForwarding::BungeeGuard { tokens } => tokens.iter().any(|t| t == token),
            _ => false,
        }
    }
}

const REDACTED: &str = "<redacted>";

fn redacted<S: Serializer>(_: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

fn redacted_list<S: Serializer>(tokens: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(tokens.iter().map(|_| REDACTED))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_round_trip_through_from_str() {
        for mode in ForwardingMode::ALL {
            assert_eq!(mode.name().parse::<ForwardingMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_mode_parsing_is_case_insensitive() {
        assert_eq!("modern".parse(), Ok(ForwardingMode::Modern));
        assert_eq!("BungeeGuard".parse(), Ok(ForwardingMode::BungeeGuard));
        assert_eq!("bungee-guard".parse(), Ok(ForwardingMode::BungeeGuard));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "velocity".parse::<ForwardingMode>().unwrap_err();
        assert_eq!(err.what, "forwarding mode");
        assert_eq!(err.name, "velocity");
    }

    #[test]
    fn test_secret_is_only_available_for_modern() {
        let modern = InfoForwarding::Modern {
            secret: "s3cr3t".to_string(),
        };
        assert_eq!(modern.secret(), Some("s3cr3t"));
        assert_eq!(InfoForwarding::Legacy.secret(), None);
    }

    #[test]
    fn test_bungee_guard_token_check() {
        let fwd = InfoForwarding::BungeeGuard {
            tokens: vec!["abc".to_string(), "def".to_string()],
        };
        assert!(fwd.accepts_token("def"));
        assert!(!fwd.accepts_token("xyz"));
        assert!(!InfoForwarding::None.accepts_token("abc"));
    }

    #[test]
    fn test_serialized_form_hides_secret() {
        let fwd = InfoForwarding::Modern {
            secret: "s3cr3t".to_string(),
        };
        let yaml = serde_yaml::to_string(&fwd).unwrap();
        assert!(yaml.contains("mode: MODERN"));
        assert!(!yaml.contains("s3cr3t"));
    }
}
