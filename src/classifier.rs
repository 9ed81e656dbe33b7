//! Compliance classification of raw encryption facts.

use crate::model::{EncryptionKind, Facts};

/// Fact key holding the encryption status reported by the provider.
pub const STATUS_KEY: &str = "status";
/// Fact key holding the encryption type when the resource is encrypted.
pub const TYPE_KEY: &str = "type";
/// Status value meaning the resource is encrypted at rest.
pub const STATUS_ENCRYPTED: &str = "encrypted";

/// Map raw facts to an encryption kind and a compliance verdict.
///
/// This is the compliance policy: only server-side and customer-managed-key
/// encryption count as compliant. Anything else (unencrypted, unknown
/// algorithm, client-side only, missing or malformed fields) is treated
/// conservatively as unencrypted and non-compliant. Total over any input
/// map; never panics.
pub fn classify(facts: &Facts) -> (EncryptionKind, bool) {
    if facts.get(STATUS_KEY).and_then(|v| v.as_str()) != Some(STATUS_ENCRYPTED) {
        return (EncryptionKind::None, false);
    }

    match facts.get(TYPE_KEY).and_then(|v| v.as_str()) {
        Some("server_side") => (EncryptionKind::ServerSide, true),
        Some("customer_managed_key") => (EncryptionKind::CustomerManagedKey, true),
        _ => (EncryptionKind::None, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn facts(pairs: &[(&str, serde_json::Value)]) -> Facts {
        let mut map = Facts::new();
        for (k, v) in pairs {
            map.insert(k.to_string(), v.clone());
        }
        map
    }

    #[test]
    fn test_server_side_encrypted_is_compliant() {
        let facts = facts(&[
            ("status", json!("encrypted")),
            ("type", json!("server_side")),
            ("algorithm", json!("AES256")),
        ]);
        assert_eq!(classify(&facts), (EncryptionKind::ServerSide, true));
    }

    #[test]
    fn test_unencrypted_is_non_compliant() {
        let facts = facts(&[("status", json!("unencrypted"))]);
        assert_eq!(classify(&facts), (EncryptionKind::None, false));
    }

    #[test]
    fn test_customer_managed_key_is_compliant() {
        let facts = facts(&[
            ("status", json!("encrypted")),
            ("type", json!("customer_managed_key")),
            ("key_id", json!("k1")),
        ]);
        assert_eq!(classify(&facts), (EncryptionKind::CustomerManagedKey, true));
    }

    #[test]
    fn test_encrypted_with_unknown_type_is_non_compliant() {
        let facts = facts(&[
            ("status", json!("encrypted")),
            ("type", json!("client_side")),
        ]);
        assert_eq!(classify(&facts), (EncryptionKind::None, false));
    }

    #[test]
    fn test_encrypted_with_missing_type_is_non_compliant() {
        let facts = facts(&[("status", json!("encrypted"))]);
        assert_eq!(classify(&facts), (EncryptionKind::None, false));
    }

    #[test]
    fn test_empty_facts_are_non_compliant() {
        assert_eq!(classify(&Facts::new()), (EncryptionKind::None, false));
    }

    #[test]
    fn test_non_string_status_is_non_compliant() {
        let facts = facts(&[("status", json!(true)), ("type", json!(42))]);
        assert_eq!(classify(&facts), (EncryptionKind::None, false));
    }

    #[test]
    fn test_unknown_status_is_non_compliant() {
        let facts = facts(&[("status", json!("unknown")), ("algorithm", json!("XTS"))]);
        assert_eq!(classify(&facts), (EncryptionKind::None, false));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let facts = facts(&[
            ("status", json!("encrypted")),
            ("type", json!("server_side")),
        ]);
        assert_eq!(classify(&facts), classify(&facts));
    }

    #[test]
    fn test_compliant_implies_recognized_kind() {
        let inputs = [
            facts(&[("status", json!("encrypted")), ("type", json!("server_side"))]),
            facts(&[("status", json!("encrypted")), ("type", json!("customer_managed_key"))]),
            facts(&[("status", json!("encrypted")), ("type", json!("something_else"))]),
            facts(&[("status", json!("unencrypted"))]),
            Facts::new(),
        ];
        for input in &inputs {
            let (kind, compliant) = classify(input);
            if compliant {
                assert!(matches!(
                    kind,
                    EncryptionKind::ServerSide | EncryptionKind::CustomerManagedKey
                ));
            }
        }
    }
}
