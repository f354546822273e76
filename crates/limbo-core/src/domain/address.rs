//! Network bind endpoint.
//!
//! The settings document names the listener address as one scalar string:
//!
//! ```text
//! localhost:65535     host + port
//! :25565              wildcard host
//! [::1]:25565         bracketed IPv6 literal
//! unix:/run/limbo.sock  platform socket path (absolute, or starting with `.`)
//! ```

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Host used when the document leaves the host part empty.
pub const WILDCARD_HOST: &str = "0.0.0.0";

const UNIX_PREFIX: &str = "unix:";

/// Errors produced while parsing an address string.
#[derive(Debug, Error, PartialEq)]
pub enum AddressParseError {
    /// No `:port` suffix was found.
    #[error("missing port in address '{0}'")]
    MissingPort(String),

    /// The port is not a number in `0..=65535`.
    #[error("invalid port '{0}'")]
    InvalidPort(String),

    /// An IPv6 literal was written without the surrounding brackets.
    #[error("IPv6 host '{0}' must be written in brackets, e.g. [::1]:25565")]
    UnbracketedIpv6(String),

    /// `unix:` was given with nothing after it.
    #[error("socket path is empty")]
    EmptyPath,

    /// A `[` without its matching `]`, or the other way round.
    #[error("unbalanced brackets in host '{0}'")]
    UnbalancedBrackets(String),
}

/// Where the server listens for connections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AddressSpec {
    /// TCP endpoint. `host` may be a hostname or an IP literal.
    Inet { host: String, port: u16 },
    /// Platform-specific socket path (Unix domain socket).
    Unix { path: PathBuf },
}

impl AddressSpec {
    /// Builds a TCP endpoint, mapping an empty host to [`WILDCARD_HOST`].
    pub fn inet(host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        let host = if host.trim().is_empty() {
            WILDCARD_HOST.to_string()
        } else {
            host
        };
        AddressSpec::Inet { host, port }
    }

    /// Returns the resolved socket address when the host is an IP literal.
    ///
    /// Hostnames need DNS resolution, which is left to the network layer.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            AddressSpec::Inet { host, port } => host
                .parse::<IpAddr>()
                .ok()
                .map(|ip| SocketAddr::new(ip, *port)),
            AddressSpec::Unix { .. } => None,
        }
    }
}

impl FromStr for AddressSpec {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // A host literally named `unix` ("unix:25565") stays a TCP address;
        // socket paths must be absolute or explicitly relative.
        if let Some(path) = s.strip_prefix(UNIX_PREFIX) {
            if path.is_empty() {
                return Err(AddressParseError::EmptyPath);
            }
            if path.starts_with('/') || path.starts_with('.') {
                return Ok(AddressSpec::Unix {
                    path: PathBuf::from(path),
                });
            }
        }

        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| AddressParseError::MissingPort(s.to_string()))?;

        let host = match (host.strip_prefix('['), host.ends_with(']')) {
            (Some(bracketed), true) => {
                let inner = &bracketed[..bracketed.len() - 1];
                if inner.contains(&['[', ']'][..]) {
                    return Err(AddressParseError::UnbalancedBrackets(host.to_string()));
                }
                inner
            }
            (None, false) if host.contains(&['[', ']'][..]) => {
                return Err(AddressParseError::UnbalancedBrackets(host.to_string()))
            }
            (None, false) if host.contains(':') => {
                return Err(AddressParseError::UnbracketedIpv6(host.to_string()))
            }
            (None, false) => host,
            _ => return Err(AddressParseError::UnbalancedBrackets(host.to_string())),
        };

        let port = port
            .parse::<u16>()
            .map_err(|_| AddressParseError::InvalidPort(port.to_string()))?;

        Ok(AddressSpec::inet(host, port))
    }
}

impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressSpec::Inet { host, port } if host.contains(':') => {
                write!(f, "[{host}]:{port}")
            }
            AddressSpec::Inet { host, port } => write!(f, "{host}:{port}"),
            AddressSpec::Unix { path } => write!(f, "{UNIX_PREFIX}{}", path.display()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_and_port() {
        let addr: AddressSpec = "localhost:65535".parse().unwrap();
        assert_eq!(addr, AddressSpec::inet("localhost", 65535));
    }

    #[test]
    fn test_parse_empty_host_maps_to_wildcard() {
        let addr: AddressSpec = ":25565".parse().unwrap();
        assert_eq!(
            addr,
            AddressSpec::Inet {
                host: WILDCARD_HOST.to_string(),
                port: 25565
            }
        );
    }

    #[test]
    fn test_parse_bracketed_ipv6() {
        let addr: AddressSpec = "[::1]:25565".parse().unwrap();
        assert_eq!(addr, AddressSpec::inet("::1", 25565));
        assert_eq!(addr.to_string(), "[::1]:25565");
        assert_eq!(addr.socket_addr(), Some("[::1]:25565".parse().unwrap()));
    }

    #[test]
    fn test_parse_unbracketed_ipv6_is_rejected() {
        let err = "::1:25565".parse::<AddressSpec>().unwrap_err();
        assert!(matches!(err, AddressParseError::UnbracketedIpv6(_)));
    }

    #[test]
    fn test_parse_unix_socket_path() {
        let addr: AddressSpec = "unix:/run/limbo.sock".parse().unwrap();
        assert_eq!(
            addr,
            AddressSpec::Unix {
                path: PathBuf::from("/run/limbo.sock")
            }
        );
        assert_eq!(addr.socket_addr(), None);
        assert_eq!(addr.to_string(), "unix:/run/limbo.sock");
    }

    #[test]
    fn test_parse_empty_unix_path_is_rejected() {
        assert_eq!(
            "unix:".parse::<AddressSpec>(),
            Err(AddressParseError::EmptyPath)
        );
    }

    #[test]
    fn test_parse_missing_port_is_rejected() {
        assert_eq!(
            "localhost".parse::<AddressSpec>(),
            Err(AddressParseError::MissingPort("localhost".to_string()))
        );
    }

    #[test]
    fn test_parse_port_out_of_range_is_rejected() {
        assert_eq!(
            "localhost:70000".parse::<AddressSpec>(),
            Err(AddressParseError::InvalidPort("70000".to_string()))
        );
    }

    #[test]
    fn test_hostname_has_no_socket_addr() {
        let addr = AddressSpec::inet("play.example.net", 25565);
        assert_eq!(addr.socket_addr(), None);
    }

    #[test]
    fn test_ipv4_literal_resolves_socket_addr() {
        let addr = AddressSpec::inet("127.0.0.1", 25565);
        assert_eq!(addr.socket_addr(), Some("127.0.0.1:25565".parse().unwrap()));
    }

    #[test]
    fn test_host_named_unix_is_an_inet_address() {
        let addr: AddressSpec = "unix:25565".parse().unwrap();
        assert_eq!(addr, AddressSpec::inet("unix", 25565));
    }

    #[test]
    fn test_parse_relative_unix_socket_path() {
        let addr: AddressSpec = "unix:./limbo.sock".parse().unwrap();
        assert_eq!(
            addr,
            AddressSpec::Unix {
                path: PathBuf::from("./limbo.sock")
            }
        );
    }

    #[test]
    fn test_unbalanced_brackets_are_rejected() {
        for input in ["[localhost:25565", "localhost]:25565", "[::1:25565", "[[::1]]:25565"] {
            assert!(
                matches!(
                    input.parse::<AddressSpec>(),
                    Err(AddressParseError::UnbalancedBrackets(_))
                ),
                "{input} must be rejected"
            );
        }
    }
}
