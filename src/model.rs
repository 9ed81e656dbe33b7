//! Core data model for encryption compliance validation.

use serde::{Deserialize, Serialize};

/// Raw encryption metadata returned by a fact source.
///
/// The shape varies by provider and resource kind, so it is carried as an
/// ordered key/value bag and passed through to reports verbatim. Only the
/// classifier interprets it, and only the `status` and `type` keys.
pub type Facts = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncryptionKind {
    None,
    ServerSide,
    ClientSide,
    CustomerManagedKey,
    #[default]
    Unknown,
}

impl EncryptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionKind::None => "none",
            EncryptionKind::ServerSide => "server_side",
            EncryptionKind::ClientSide => "client_side",
            EncryptionKind::CustomerManagedKey => "customer_managed_key",
            EncryptionKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EncryptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    ObjectStorage,
    Database,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::ObjectStorage => "object_storage",
            ResourceKind::Database => "database",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One validated storage resource. Built once per resource and owned by the
/// [`ValidationResult`] that holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageLocation {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "encryption_type")]
    pub encryption: EncryptionKind,
    #[serde(rename = "encryption_details", skip_serializing_if = "Option::is_none")]
    pub details: Option<Facts>,
    pub compliant: bool,
}

/// Per-resource failure captured during a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub resource_id: String,
    #[serde(rename = "error_message")]
    pub message: String,
}

/// Aggregate outcome of a validation run.
///
/// Locations keep insertion order, which is the order resources were
/// validated in. `all_encrypted` is derived state: it is recomputed on every
/// mutation and holds exactly when the location list is non-empty, every
/// location is compliant, and no errors were recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub all_encrypted: bool,
    pub storage_locations: Vec<StorageLocation>,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated location and recompute the overall status.
    pub fn add_location(&mut self, location: StorageLocation) {
        self.storage_locations.push(location);
        self.recalculate();
    }

    /// Append an error record and recompute the overall status.
    pub fn add_error(&mut self, resource_id: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError {
            resource_id: resource_id.into(),
            message: message.into(),
        });
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.all_encrypted = !self.storage_locations.is_empty()
            && self.storage_locations.iter().all(|l| l.compliant)
            && self.errors.is_empty();
    }

    pub fn total(&self) -> usize {
        self.storage_locations.len()
    }

    pub fn compliant_count(&self) -> usize {
        self.storage_locations.iter().filter(|l| l.compliant).count()
    }

    pub fn non_compliant_count(&self) -> usize {
        self.total() - self.compliant_count()
    }

    pub fn count_of_kind(&self, kind: ResourceKind) -> usize {
        self.storage_locations
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }
}
