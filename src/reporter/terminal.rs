use colored::Colorize;

use crate::model::{StorageLocation, ValidationResult};
use crate::reporter::Reporter;

/// Colored console rendering of a validation result.
pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_location(&self, location: &StorageLocation) -> String {
        let marker = if location.compliant {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        let mut line = format!(
            "{} {} ({}) {}",
            marker,
            location.name,
            location.kind,
            location.encryption
        );
        if self.verbose {
            if let Some(region) = &location.region {
                line.push_str(&format!(" [{}]", region.dimmed()));
            }
            if let Some(details) = &location.details {
                if let Some(algorithm) = details.get("algorithm").and_then(|v| v.as_str()) {
                    line.push_str(&format!(" {}", algorithm.dimmed()));
                }
            }
        }
        line.push('\n');
        line
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ValidationResult) -> String {
        let mut output = String::new();

        for location in &result.storage_locations {
            output.push_str(&self.format_location(location));
        }

        if !result.errors.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                format!("Errors: {}", result.errors.len()).yellow().bold()
            ));
            for error in &result.errors {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    "!".yellow(),
                    error.resource_id,
                    error.message
                ));
            }
        }

        let banner = if result.all_encrypted {
            "✓ ALL RESOURCES ARE ENCRYPTED".green().bold().to_string()
        } else {
            "✗ SOME RESOURCES ARE NOT ENCRYPTED".red().bold().to_string()
        };
        output.push_str(&format!("\n{}\n", banner));

        output.push_str(&format!("\nTotal resources checked: {}\n", result.total()));
        output.push_str(&format!("Compliant: {}\n", result.compliant_count()));
        output.push_str(&format!("Non-compliant: {}\n", result.non_compliant_count()));

        output
    }
}
