use chrono::Utc;

use crate::model::{ResourceKind, ValidationResult};
use crate::reporter::Reporter;

/// Plain-text audit summary, the report that is always written.
pub struct SummaryReporter;

impl SummaryReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SummaryReporter {
    fn report(&self, result: &ValidationResult) -> String {
        let mut output = String::new();
        output.push_str("FedRAMP Encryption Validation Summary\n");
        output.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));

        let status = if result.all_encrypted {
            "COMPLIANT"
        } else {
            "NON-COMPLIANT"
        };
        output.push_str(&format!("Overall Status: {}\n\n", status));

        output.push_str(&format!("Storage Locations: {}\n", result.total()));
        output.push_str(&format!(
            " - Object Storage: {}\n",
            result.count_of_kind(ResourceKind::ObjectStorage)
        ));
        output.push_str(&format!(
            " - Databases: {}\n\n",
            result.count_of_kind(ResourceKind::Database)
        ));

        output.push_str(&format!(
            "Compliant Locations: {}/{}\n",
            result.compliant_count(),
            result.total()
        ));

        if !result.errors.is_empty() {
            output.push_str(&format!("\nErrors: {}\n", result.errors.len()));
            for error in &result.errors {
                output.push_str(&format!(" - {}: {}\n", error.resource_id, error.message));
            }
        }

        output
    }
}
