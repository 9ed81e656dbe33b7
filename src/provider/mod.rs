//! Fact sources: read-only providers of raw encryption configuration.
//!
//! A fact source answers one question per resource kind: what does the
//! provider say about this resource's encryption at rest? Answers come back
//! as an opaque [`Facts`] bag with at least a `status` field and, when
//! encrypted, a `type` field. Failures are distinguishable outcomes: a
//! fact source never papers over an error with a defaulted "unencrypted"
//! status.

pub mod aws;
pub mod fake;

use crate::model::Facts;
use thiserror::Error;

pub use aws::AwsCli;
pub use fake::FakeFactSource;

/// Per-resource failure from a fact source.
///
/// Every variant is recovered at the per-resource level by the validator and
/// surfaced as an error record in the validation result; none aborts a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("access denied reading encryption configuration for {0}")]
    AccessDenied(String),

    #[error("provider call failed for {id}: {reason}")]
    Transport { id: String, reason: String },
}

/// Synchronous, provider-agnostic source of encryption facts.
///
/// One implementation per cloud provider; only one provider is active per
/// validation run. Calls are blocking network operations; timeout and retry
/// policy belongs to the implementation, not the validator.
pub trait FactSource {
    /// Encryption facts for an object storage bucket.
    fn bucket_encryption(&self, id: &str) -> Result<Facts, FactError>;

    /// Encryption facts for a key-value table.
    fn table_encryption(&self, id: &str) -> Result<Facts, FactError>;

    /// Encryption facts for a relational database instance.
    fn instance_encryption(&self, id: &str) -> Result<Facts, FactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_error_display_not_found() {
        let err = FactError::NotFound("my-bucket".to_string());
        assert_eq!(err.to_string(), "resource not found: my-bucket");
    }

    #[test]
    fn test_fact_error_display_access_denied() {
        let err = FactError::AccessDenied("my-table".to_string());
        assert_eq!(
            err.to_string(),
            "access denied reading encryption configuration for my-table"
        );
    }

    #[test]
    fn test_fact_error_display_transport() {
        let err = FactError::Transport {
            id: "db-1".to_string(),
            reason: "connection reset".to_string(),
        };
        assert_eq!(err.to_string(), "provider call failed for db-1: connection reset");
    }
}
