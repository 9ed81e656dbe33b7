//! CLI command handlers.
//!
//! Exit codes: 0 when every requested resource is compliant, 1 when any
//! resource is non-compliant or failed to validate, 2 for usage and setup
//! errors.

use std::collections::HashMap;
use std::process::ExitCode;

use tracing::info;

use crate::cli::{Provider, ReportFormat, ValidateArgs};
use crate::config::RunConfig;
use crate::model::ValidationResult;
use crate::provider::AwsCli;
use crate::reporter::{ReportWriter, Reporter, TerminalReporter};
use crate::validator::Validator;

pub fn handle_validate(args: &ValidateArgs) -> ExitCode {
    let config = RunConfig::resolve(args);
    if config.is_empty() {
        eprintln!("Error: no resources specified for validation.");
        eprintln!(
            "Specify at least one resource using --s3-buckets, --dynamodb-tables, or --rds-instances."
        );
        return ExitCode::from(2);
    }

    let result = match args.provider {
        Provider::Aws => {
            let source = match AwsCli::new(args.region.clone(), args.profile.clone()) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::from(2);
                }
            };
            run_aws_validation(&config, source, args)
        }
    };

    match write_reports(&config, args, &result) {
        Ok(()) => {}
        Err(code) => return code,
    }

    if !args.quiet {
        println!("{}", TerminalReporter::new(args.verbose).report(&result));
    }

    if result.all_encrypted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn run_aws_validation(config: &RunConfig, source: AwsCli, args: &ValidateArgs) -> ValidationResult {
    let region = source.region().map(str::to_string);
    info!(provider = "aws", region = ?region, "starting validation");

    // Tables first, then instances, mirroring the flag order. The kind map
    // lets one database list carry both kinds.
    let mut database_ids = Vec::new();
    let mut kinds: HashMap<String, &str> = HashMap::new();
    for table in &config.dynamodb_tables {
        database_ids.push(table.clone());
        kinds.insert(table.clone(), "dynamodb");
    }
    for instance in &config.rds_instances {
        database_ids.push(instance.clone());
        kinds.insert(instance.clone(), "rds");
    }

    let validator = Validator::new(source, args.provider.as_str(), region);
    validator.validate(&config.s3_buckets, &database_ids, |id| {
        kinds.get(id).copied().unwrap_or("dynamodb").to_string()
    })
}

fn write_reports(
    config: &RunConfig,
    args: &ValidateArgs,
    result: &ValidationResult,
) -> Result<(), ExitCode> {
    let writer = ReportWriter::new(config.output_dir.clone());

    if matches!(args.format, ReportFormat::Json | ReportFormat::All) {
        let path = report_path(writer.write_json(result))?;
        println!("JSON report written to: {}", path.display());
    }

    if matches!(args.format, ReportFormat::Csv | ReportFormat::All) {
        let path = report_path(writer.write_csv(result))?;
        println!("CSV report written to: {}", path.display());
    }

    let path = report_path(writer.write_summary(result))?;
    println!("Summary report written to: {}", path.display());
    Ok(())
}

fn report_path(
    outcome: crate::error::Result<std::path::PathBuf>,
) -> Result<std::path::PathBuf, ExitCode> {
    outcome.map_err(|e| {
        eprintln!("Error: {e}");
        ExitCode::from(2)
    })
}
