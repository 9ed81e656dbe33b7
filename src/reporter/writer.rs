//! Writes rendered reports to timestamped files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::error::{CheckError, Result};
use crate::model::ValidationResult;
use crate::reporter::{CsvReporter, JsonReporter, Reporter, SummaryReporter};

/// Writes reports into an output directory, creating it on demand.
/// Filenames carry a UTC timestamp so repeated runs do not clobber earlier
/// reports.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// `output_dir` defaults to the current directory.
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn write_json(&self, result: &ValidationResult) -> Result<PathBuf> {
        self.write(&JsonReporter::new().report(result), "json")
    }

    pub fn write_csv(&self, result: &ValidationResult) -> Result<PathBuf> {
        self.write(&CsvReporter::new().report(result), "csv")
    }

    pub fn write_summary(&self, result: &ValidationResult) -> Result<PathBuf> {
        self.write(&SummaryReporter::new().report(result), "txt")
    }

    fn write(&self, content: &str, extension: &str) -> Result<PathBuf> {
        let path = self.stamped_path(extension);
        fs::create_dir_all(&self.output_dir).map_err(|e| CheckError::ReportWrite {
            path: self.output_dir.clone(),
            source: e,
        })?;
        fs::write(&path, content).map_err(|e| CheckError::ReportWrite {
            path: path.clone(),
            source: e,
        })?;
        debug!(path = %path.display(), "report written");
        Ok(path)
    }

    fn stamped_path(&self, extension: &str) -> PathBuf {
        let stamp = Utc::now().format("%Y%m%d-%H%M%S");
        let name = match extension {
            "txt" => format!("encryption-validation-summary-{stamp}.txt"),
            other => format!("encryption-validation-{stamp}.{other}"),
        };
        self.output_dir.join(name)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
