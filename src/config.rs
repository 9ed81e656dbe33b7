//! Run configuration resolved from CLI flags with environment fallbacks.
//!
//! Flags win; unset flags fall back to the environment variables used by
//! scheduled invocations (`S3_BUCKETS`, `DYNAMODB_TABLES`, `RDS_INSTANCES`,
//! `OUTPUT_DIR`).

use std::env;
use std::path::PathBuf;

use crate::cli::ValidateArgs;

pub const ENV_S3_BUCKETS: &str = "S3_BUCKETS";
pub const ENV_DYNAMODB_TABLES: &str = "DYNAMODB_TABLES";
pub const ENV_RDS_INSTANCES: &str = "RDS_INSTANCES";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";

/// The resolved resource lists and output location for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub s3_buckets: Vec<String>,
    pub dynamodb_tables: Vec<String>,
    pub rds_instances: Vec<String>,
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn resolve(args: &ValidateArgs) -> Self {
        Self {
            s3_buckets: list_from(args.s3_buckets.as_deref(), ENV_S3_BUCKETS),
            dynamodb_tables: list_from(args.dynamodb_tables.as_deref(), ENV_DYNAMODB_TABLES),
            rds_instances: list_from(args.rds_instances.as_deref(), ENV_RDS_INSTANCES),
            output_dir: args
                .output_dir
                .clone()
                .or_else(|| env::var(ENV_OUTPUT_DIR).ok().map(PathBuf::from)),
        }
    }

    /// True when no resources were requested at all, which is a usage error.
    pub fn is_empty(&self) -> bool {
        self.s3_buckets.is_empty()
            && self.dynamodb_tables.is_empty()
            && self.rds_instances.is_empty()
    }
}

fn list_from(flag: Option<&str>, env_key: &str) -> Vec<String> {
    match flag {
        Some(raw) => split_list(raw),
        None => env::var(env_key).map(|raw| split_list(&raw)).unwrap_or_default(),
    }
}

/// Split a comma-separated list, trimming whitespace and dropping empty
/// segments.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(split_list("a, b ,,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list(" , "), Vec::<String>::new());
    }

    #[test]
    fn test_resolve_from_flags() {
        let args = ValidateArgs {
            s3_buckets: Some("bucket-a,bucket-b".to_string()),
            dynamodb_tables: Some("table-a".to_string()),
            rds_instances: Some(String::new()),
            output_dir: Some(PathBuf::from("/tmp/reports")),
            ..Default::default()
        };
        let config = RunConfig::resolve(&args);
        assert_eq!(config.s3_buckets, vec!["bucket-a", "bucket-b"]);
        assert_eq!(config.dynamodb_tables, vec!["table-a"]);
        assert!(config.rds_instances.is_empty());
        assert_eq!(config.output_dir.as_deref(), Some(std::path::Path::new("/tmp/reports")));
    }

    #[test]
    fn test_is_empty() {
        assert!(RunConfig::default().is_empty());
        let config = RunConfig {
            rds_instances: vec!["db-1".to_string()],
            ..Default::default()
        };
        assert!(!config.is_empty());
    }

    #[test]
    fn test_flag_wins_over_environment() {
        // Explicit empty-ish flag still takes precedence over any env value.
        let args = ValidateArgs {
            s3_buckets: Some("flag-bucket".to_string()),
            ..Default::default()
        };
        let config = RunConfig::resolve(&args);
        assert_eq!(config.s3_buckets, vec!["flag-bucket"]);
    }
}
