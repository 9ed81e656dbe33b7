pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod provider;
pub mod reporter;
pub mod validator;

#[cfg(test)]
pub mod test_utils;

pub use classifier::classify;
pub use cli::{Cli, Command, Provider, ReportFormat, ValidateArgs};
pub use error::{CheckError, Result};
pub use model::{
    EncryptionKind, Facts, ResourceKind, StorageLocation, ValidationError, ValidationResult,
};
pub use provider::{AwsCli, FactError, FactSource, FakeFactSource};
pub use reporter::{
    CsvReporter, JsonReporter, ReportWriter, Reporter, SummaryReporter, TerminalReporter,
};
pub use validator::{DatabaseKind, UnsupportedKind, Validator};
