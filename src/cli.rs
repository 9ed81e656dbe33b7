use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Provider {
    #[default]
    Aws,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Aws => "aws",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportFormat {
    Json,
    Csv,
    #[default]
    All,
}

#[derive(Parser, Debug)]
#[command(
    name = "encheck",
    version,
    about = "Encryption-at-rest compliance checker for cloud storage resources",
    long_about = "encheck validates that object storage buckets, key-value tables, and \
                  relational database instances are encrypted at rest, and writes \
                  compliance reports for continuous-monitoring audits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate encryption for cloud resources
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Cloud provider to validate
    #[arg(long, value_enum, default_value_t = Provider::Aws)]
    pub provider: Provider,

    /// Cloud provider region
    #[arg(long)]
    pub region: Option<String>,

    /// Cloud provider profile (e.g. AWS profile)
    #[arg(long)]
    pub profile: Option<String>,

    /// Comma-separated list of S3 bucket names to validate
    #[arg(long)]
    pub s3_buckets: Option<String>,

    /// Comma-separated list of DynamoDB table names to validate
    #[arg(long)]
    pub dynamodb_tables: Option<String>,

    /// Comma-separated list of RDS instance identifiers to validate
    #[arg(long)]
    pub rds_instances: Option<String>,

    /// Directory to write reports to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = ReportFormat::All)]
    pub format: ReportFormat,

    /// Suppress the console summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose console output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    fn validate_args(cli: Cli) -> ValidateArgs {
        match cli.command {
            Command::Validate(args) => args,
        }
    }

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_buckets() {
        let args = validate_args(parse(&["encheck", "validate", "--s3-buckets", "a,b"]));
        assert_eq!(args.s3_buckets.as_deref(), Some("a,b"));
        assert_eq!(args.provider, Provider::Aws);
        assert_eq!(args.format, ReportFormat::All);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_format_json() {
        let args = validate_args(parse(&[
            "encheck", "validate", "--s3-buckets", "a", "--format", "json",
        ]));
        assert_eq!(args.format, ReportFormat::Json);
    }

    #[test]
    fn test_parse_region_and_profile() {
        let args = validate_args(parse(&[
            "encheck",
            "validate",
            "--region",
            "us-west-2",
            "--profile",
            "audit",
            "--rds-instances",
            "db-1",
        ]));
        assert_eq!(args.region.as_deref(), Some("us-west-2"));
        assert_eq!(args.profile.as_deref(), Some("audit"));
        assert_eq!(args.rds_instances.as_deref(), Some("db-1"));
    }

    #[test]
    fn test_parse_output_dir() {
        let args = validate_args(parse(&[
            "encheck", "validate", "--s3-buckets", "a", "--output-dir", "/tmp/reports",
        ]));
        assert_eq!(args.output_dir.as_deref(), Some(std::path::Path::new("/tmp/reports")));
    }

    #[test]
    fn test_parse_quiet() {
        let args = validate_args(parse(&["encheck", "validate", "-q", "--s3-buckets", "a"]));
        assert!(args.quiet);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let result = Cli::try_parse_from(["encheck", "validate", "--provider", "azure"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from(["encheck", "validate", "--format", "xml"]);
        assert!(result.is_err());
    }
}
