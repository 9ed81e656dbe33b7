//! Shared fixtures for unit tests.

use serde_json::json;

use crate::model::{
    EncryptionKind, Facts, ResourceKind, StorageLocation, ValidationResult,
};

pub fn server_side_facts() -> Facts {
    let mut facts = Facts::new();
    facts.insert("status".to_string(), json!("encrypted"));
    facts.insert("type".to_string(), json!("server_side"));
    facts.insert("algorithm".to_string(), json!("AES256"));
    facts
}

pub fn compliant_location(id: &str, kind: ResourceKind) -> StorageLocation {
    StorageLocation {
        id: id.to_string(),
        name: id.to_string(),
        kind,
        provider: "aws".to_string(),
        region: Some("us-east-1".to_string()),
        encryption: EncryptionKind::ServerSide,
        details: Some(server_side_facts()),
        compliant: true,
    }
}

pub fn non_compliant_location(id: &str, kind: ResourceKind) -> StorageLocation {
    let mut facts = Facts::new();
    facts.insert("status".to_string(), json!("unencrypted"));
    StorageLocation {
        id: id.to_string(),
        name: id.to_string(),
        kind,
        provider: "aws".to_string(),
        region: Some("us-east-1".to_string()),
        encryption: EncryptionKind::None,
        details: Some(facts),
        compliant: false,
    }
}

/// A mixed result: one compliant bucket, one unencrypted database, one error.
pub fn mixed_result() -> ValidationResult {
    let mut result = ValidationResult::new();
    result.add_location(compliant_location("bucket-a", ResourceKind::ObjectStorage));
    result.add_location(non_compliant_location("db-1", ResourceKind::Database));
    result.add_error("table-x", "resource not found: table-x");
    result
}

/// A fully compliant result with one bucket and one table.
pub fn compliant_result() -> ValidationResult {
    let mut result = ValidationResult::new();
    result.add_location(compliant_location("bucket-a", ResourceKind::ObjectStorage));
    result.add_location(compliant_location("table-a", ResourceKind::Database));
    result
}
