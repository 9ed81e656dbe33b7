use crate::model::ValidationResult;
use crate::reporter::Reporter;

/// Renders one row per validated location. Errors are not part of the CSV;
/// they belong to the JSON and summary reports.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for CsvReporter {
    fn report(&self, result: &ValidationResult) -> String {
        let mut output = String::from("ID,Name,Type,Provider,Region,Encryption Type,Compliant\n");
        for location in &result.storage_locations {
            let row = [
                location.id.as_str(),
                location.name.as_str(),
                location.kind.as_str(),
                location.provider.as_str(),
                location.region.as_deref().unwrap_or(""),
                location.encryption.as_str(),
                if location.compliant { "true" } else { "false" },
            ];
            let escaped: Vec<String> = row.iter().map(|f| escape(f)).collect();
            output.push_str(&escaped.join(","));
            output.push('\n');
        }
        output
    }
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
