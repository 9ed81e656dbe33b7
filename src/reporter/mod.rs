pub mod csv;
pub mod json;
pub mod summary;
pub mod terminal;
pub mod writer;

use crate::model::ValidationResult;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use terminal::TerminalReporter;
pub use writer::ReportWriter;

pub trait Reporter {
    fn report(&self, result: &ValidationResult) -> String;
}
