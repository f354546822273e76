//! `bind` decoder.
//!
//! Accepts the scalar form (`"localhost:65535"`) and the older mapping form
//! (`{ ip: localhost, port: 65535 }`).

use crate::domain::AddressSpec;
use crate::node::{Node, NodeError};

use super::{DecodeCause, DecodeError};

pub(super) fn decode(node: &Node<'_>) -> Result<AddressSpec, DecodeError> {
    let fail = |cause: DecodeCause| DecodeError::of::<AddressSpec>(node, cause);

    if !node.is_present() {
        return Err(fail(
            NodeError::Missing {
                path: node.path().clone(),
            }
            .into(),
        ));
    }

    if node.raw().is_some_and(|v| v.is_mapping()) {
        let host = node
            .child("ip")
            .get_or(String::new())
            .map_err(|e| fail(e.into()))?;
        let port = node.child("port").get::<u16>().map_err(|e| fail(e.into()))?;
        return Ok(AddressSpec::inet(host, port));
    }

    let text = node.get::<String>().map_err(|e| fail(e.into()))?;
    text.parse::<AddressSpec>()
        .map_err(|e| fail(DecodeCause::invalid(node.path(), e)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn decode_yaml(yaml: &str) -> Result<AddressSpec, DecodeError> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        decode(&Node::root(&value).child("bind"))
    }

    #[test]
    fn test_scalar_form() {
        assert_eq!(
            decode_yaml("bind: 'localhost:65535'"),
            Ok(AddressSpec::inet("localhost", 65535))
        );
    }

    #[test]
    fn test_mapping_form() {
        assert_eq!(
            decode_yaml("bind: { ip: 127.0.0.1, port: 25565 }"),
            Ok(AddressSpec::inet("127.0.0.1", 25565))
        );
    }

    #[test]
    fn test_mapping_form_with_empty_ip_uses_wildcard() {
        assert_eq!(
            decode_yaml("bind: { ip: '', port: 25565 }"),
            Ok(AddressSpec::inet("0.0.0.0", 25565))
        );
    }

    #[test]
    fn test_mapping_form_requires_port() {
        let err = decode_yaml("bind: { ip: localhost }").unwrap_err();
        assert_eq!(err.target, "AddressSpec");
        assert_eq!(err.cause.path().to_string(), "bind.port");
    }

    #[test]
    fn test_unparseable_string_is_invalid() {
        let err = decode_yaml("bind: 'localhost'").unwrap_err();
        assert!(matches!(err.cause, DecodeCause::Invalid { .. }));
        assert_eq!(err.path.to_string(), "bind");
    }

    #[test]
    fn test_absent_bind_is_missing() {
        let err = decode_yaml("other: 1").unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn test_sequence_is_wrong_type() {
        let err = decode_yaml("bind: [localhost, 25565]").unwrap_err();
        assert!(matches!(
            err.cause,
            DecodeCause::Node(NodeError::WrongType { .. })
        ));
    }
}
