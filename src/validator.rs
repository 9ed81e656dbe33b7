//! Sequential per-resource validation driver.
//!
//! Resources are checked one at a time in input order: object storage first,
//! then databases. A failing resource never aborts the batch; its failure
//! is recorded in the result and the loop moves on.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::classifier::classify;
use crate::model::{ResourceKind, StorageLocation, ValidationResult};
use crate::provider::FactSource;

/// Database kinds the validator can dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    /// Key-value table (DynamoDB and the like).
    KeyValue,
    /// Relational database instance (RDS and the like).
    Relational,
}

/// A database identifier was tagged with a kind the validator does not
/// recognize. Captured as an error record for that resource, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported database kind: {0}")]
pub struct UnsupportedKind(pub String);

impl FromStr for DatabaseKind {
    type Err = UnsupportedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dynamodb" => Ok(DatabaseKind::KeyValue),
            "rds" => Ok(DatabaseKind::Relational),
            other => Err(UnsupportedKind(other.to_string())),
        }
    }
}

/// Drives a fact source over a requested resource list and folds the
/// per-resource outcomes into a [`ValidationResult`].
pub struct Validator<S> {
    source: S,
    provider: String,
    region: Option<String>,
}

impl<S: FactSource> Validator<S> {
    /// `provider` and `region` are run-constant configuration stamped onto
    /// every location this validator produces.
    pub fn new(source: S, provider: impl Into<String>, region: Option<String>) -> Self {
        Self {
            source,
            provider: provider.into(),
            region,
        }
    }

    /// Validate all requested resources and return the aggregated result.
    ///
    /// `kind_resolver` tags each database identifier with a kind token
    /// (`"dynamodb"` or `"rds"`); an unrecognized token becomes an error
    /// record for that identifier. Strictly sequential, no resource is
    /// queried twice, and one failure never aborts the rest of the batch.
    pub fn validate<F>(
        &self,
        object_storage_ids: &[String],
        database_ids: &[String],
        kind_resolver: F,
    ) -> ValidationResult
    where
        F: Fn(&str) -> String,
    {
        let mut result = ValidationResult::new();

        info!(
            provider = %self.provider,
            object_storage = object_storage_ids.len(),
            databases = database_ids.len(),
            "starting validation run"
        );

        for id in object_storage_ids {
            match self.source.bucket_encryption(id) {
                Ok(facts) => {
                    result.add_location(self.location(id, ResourceKind::ObjectStorage, facts));
                }
                Err(e) => {
                    warn!(resource = %id, error = %e, "object storage check failed");
                    result.add_error(id.as_str(), e.to_string());
                }
            }
        }

        for id in database_ids {
            let outcome = match kind_resolver(id).parse::<DatabaseKind>() {
                Ok(DatabaseKind::KeyValue) => self.source.table_encryption(id),
                Ok(DatabaseKind::Relational) => self.source.instance_encryption(id),
                Err(e) => {
                    warn!(resource = %id, error = %e, "database kind not recognized");
                    result.add_error(id.as_str(), e.to_string());
                    continue;
                }
            };
            match outcome {
                Ok(facts) => {
                    result.add_location(self.location(id, ResourceKind::Database, facts));
                }
                Err(e) => {
                    warn!(resource = %id, error = %e, "database check failed");
                    result.add_error(id.as_str(), e.to_string());
                }
            }
        }

        debug!(
            locations = result.total(),
            errors = result.errors.len(),
            all_encrypted = result.all_encrypted,
            "validation run complete"
        );
        result
    }

    fn location(&self, id: &str, kind: ResourceKind, facts: crate::model::Facts) -> StorageLocation {
        let (encryption, compliant) = classify(&facts);
        StorageLocation {
            id: id.to_string(),
            name: id.to_string(),
            kind,
            provider: self.provider.clone(),
            region: self.region.clone(),
            encryption,
            details: Some(facts),
            compliant,
        }
    }
}
