//! `infoForwarding` decoder.
//!
//! The `mode` field selects the variant and therefore which other fields are
//! required. Older settings files call the discriminator `type`; it is read
//! when `mode` is absent.

use crate::domain::{ForwardingMode, InfoForwarding};
use crate::node::Node;

use super::{DecodeCause, DecodeError};

pub(super) fn decode(node: &Node<'_>) -> Result<InfoForwarding, DecodeError> {
    let fail = |cause: DecodeCause| DecodeError::of::<InfoForwarding>(node, cause);

    let mut mode_node = node.child("mode");
    if !mode_node.is_present() && node.child("type").is_present() {
        mode_node = node.child("type");
    }
    let mode_name = mode_node.get::<String>().map_err(|e| fail(e.into()))?;
    let mode = mode_name
        .parse::<ForwardingMode>()
        .map_err(|e| fail(DecodeCause::invalid(mode_node.path(), e)))?;

    match mode {
        ForwardingMode::None => Ok(InfoForwarding::None),
        ForwardingMode::Legacy => Ok(InfoForwarding::Legacy),
        ForwardingMode::Modern => {
            let secret_node = node.child("secret");
            let secret = secret_node.get::<String>().map_err(|e| fail(e.into()))?;
            if secret.is_empty() {
                return Err(fail(DecodeCause::invalid(
                    secret_node.path(),
                    "modern forwarding requires a non-empty secret",
                )));
            }
            Ok(InfoForwarding::Modern { secret })
        }
        ForwardingMode::BungeeGuard => {
            let tokens_node = node.child("tokens");
            let tokens = tokens_node
                .get_list::<String>()
                .map_err(|e| fail(e.into()))?;
            if tokens.is_empty() {
                return Err(fail(DecodeCause::invalid(
                    tokens_node.path(),
                    "BungeeGuard forwarding requires at least one token",
                )));
            }
            Ok(InfoForwarding::BungeeGuard { tokens })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn decode_yaml(yaml: &str) -> Result<InfoForwarding, DecodeError> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        decode(&Node::root(&value).child("infoForwarding"))
    }

    #[test]
    fn test_none_ignores_extra_fields() {
        assert_eq!(
            decode_yaml("infoForwarding: { mode: NONE, secret: unused }"),
            Ok(InfoForwarding::None)
        );
    }

    #[test]
    fn test_legacy() {
        assert_eq!(
            decode_yaml("infoForwarding: { mode: legacy }"),
            Ok(InfoForwarding::Legacy)
        );
    }

    #[test]
    fn test_modern_with_secret() {
        assert_eq!(
            decode_yaml("infoForwarding: { mode: MODERN, secret: 'abc123' }"),
            Ok(InfoForwarding::Modern {
                secret: "abc123".to_string()
            })
        );
    }

    #[test]
    fn test_modern_without_secret_fails() {
        let err = decode_yaml("infoForwarding: { mode: MODERN }").unwrap_err();
        assert_eq!(err.target, "InfoForwarding");
        assert_eq!(err.cause.path().to_string(), "infoForwarding.secret");
    }

    #[test]
    fn test_modern_with_empty_secret_fails() {
        let err = decode_yaml("infoForwarding: { mode: MODERN, secret: '' }").unwrap_err();
        assert!(matches!(err.cause, DecodeCause::Invalid { .. }));
    }

    #[test]
    fn test_bungee_guard_tokens() {
        assert_eq!(
            decode_yaml("infoForwarding: { mode: BUNGEE_GUARD, tokens: [a, b] }"),
            Ok(InfoForwarding::BungeeGuard {
                tokens: vec!["a".to_string(), "b".to_string()]
            })
        );
    }

    #[test]
    fn test_bungee_guard_without_tokens_fails() {
        let err = decode_yaml("infoForwarding: { mode: BUNGEE_GUARD }").unwrap_err();
        assert_eq!(err.cause.path().to_string(), "infoForwarding.tokens");
    }

    #[test]
    fn test_legacy_type_key_is_accepted() {
        assert_eq!(
            decode_yaml("infoForwarding: { type: LEGACY }"),
            Ok(InfoForwarding::Legacy)
        );
    }

    #[test]
    fn test_unknown_mode_fails_naming_the_group() {
        let err = decode_yaml("infoForwarding: { mode: SIDEWAYS }").unwrap_err();
        assert_eq!(err.path.to_string(), "infoForwarding");
        assert_eq!(err.cause.path().to_string(), "infoForwarding.mode");
        assert!(err.to_string().contains("SIDEWAYS"));
    }

    #[test]
    fn test_missing_mode_reports_mode_key() {
        let err = decode_yaml("infoForwarding: { secret: x }").unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.cause.path().to_string(), "infoForwarding.mode");
    }
}
