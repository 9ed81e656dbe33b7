//! In-memory fact source for tests and local development.
//!
//! All state lives in memory; lookups for identifiers that were never
//! registered behave like a missing cloud resource.

use std::collections::HashMap;

use super::{FactError, FactSource};
use crate::model::Facts;

type Outcome = Result<Facts, FactError>;

/// Fact source whose answers are scripted up front.
#[derive(Debug, Default)]
pub struct FakeFactSource {
    buckets: HashMap<String, Outcome>,
    tables: HashMap<String, Outcome>,
    instances: HashMap<String, Outcome>,
}

impl FakeFactSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket(mut self, id: impl Into<String>, facts: Facts) -> Self {
        self.buckets.insert(id.into(), Ok(facts));
        self
    }

    pub fn with_bucket_failure(mut self, id: impl Into<String>, error: FactError) -> Self {
        self.buckets.insert(id.into(), Err(error));
        self
    }

    pub fn with_table(mut self, id: impl Into<String>, facts: Facts) -> Self {
        self.tables.insert(id.into(), Ok(facts));
        self
    }

    pub fn with_table_failure(mut self, id: impl Into<String>, error: FactError) -> Self {
        self.tables.insert(id.into(), Err(error));
        self
    }

    pub fn with_instance(mut self, id: impl Into<String>, facts: Facts) -> Self {
        self.instances.insert(id.into(), Ok(facts));
        self
    }

    pub fn with_instance_failure(mut self, id: impl Into<String>, error: FactError) -> Self {
        self.instances.insert(id.into(), Err(error));
        self
    }

    fn lookup(map: &HashMap<String, Outcome>, id: &str) -> Outcome {
        map.get(id)
            .cloned()
            .unwrap_or_else(|| Err(FactError::NotFound(id.to_string())))
    }
}

impl FactSource for FakeFactSource {
    fn bucket_encryption(&self, id: &str) -> Result<Facts, FactError> {
        Self::lookup(&self.buckets, id)
    }

    fn table_encryption(&self, id: &str) -> Result<Facts, FactError> {
        Self::lookup(&self.tables, id)
    }

    fn instance_encryption(&self, id: &str) -> Result<Facts, FactError> {
        Self::lookup(&self.instances, id)
    }
}
