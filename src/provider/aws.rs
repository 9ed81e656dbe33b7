//! AWS fact source backed by the `aws` CLI.
//!
//! Encryption configuration is read with `aws s3api get-bucket-encryption`,
//! `aws dynamodb describe-table`, and `aws rds describe-db-instances`, all
//! with `--output json`, and the responses are mapped into the flat fact
//! shape the classifier understands. The mapping functions are pure so the
//! response handling can be tested without a cloud account.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tracing::debug;

use super::{FactError, FactSource};
use crate::error::CheckError;
use crate::model::Facts;

/// Error markers the AWS CLI prints for missing resources.
const NOT_FOUND_MARKERS: &[&str] = &[
    "NoSuchBucket",
    "ResourceNotFoundException",
    "DBInstanceNotFound",
];

/// Error markers for insufficient permissions.
const ACCESS_DENIED_MARKERS: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "UnauthorizedOperation",
];

/// S3 reports "no encryption configured" as an error rather than an empty
/// configuration.
const SSE_NOT_FOUND: &str = "ServerSideEncryptionConfigurationNotFoundError";

/// Fact source that shells out to the AWS CLI.
pub struct AwsCli {
    bin: PathBuf,
    region: Option<String>,
    profile: Option<String>,
}

impl AwsCli {
    /// Locate the `aws` binary and resolve the effective region.
    ///
    /// A missing binary is a fatal setup error, not a per-resource failure.
    /// A region given explicitly wins over the profile's configured default.
    pub fn new(region: Option<String>, profile: Option<String>) -> Result<Self, CheckError> {
        let bin = which::which("aws").map_err(|_| CheckError::CliNotFound("aws".to_string()))?;
        let region = region.or_else(|| configured_region(&bin, profile.as_deref()));
        Ok(Self { bin, region, profile })
    }

    /// The region all facts are read from, if one is known.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn run(&self, id: &str, args: &[&str]) -> Result<Output, FactError> {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args).args(["--output", "json"]);
        if let Some(region) = &self.region {
            cmd.args(["--region", region]);
        }
        if let Some(profile) = &self.profile {
            cmd.args(["--profile", profile]);
        }
        debug!(resource = id, ?args, "invoking aws cli");
        cmd.output().map_err(|e| FactError::Transport {
            id: id.to_string(),
            reason: format!("failed to spawn aws cli: {e}"),
        })
    }

    fn parse(&self, id: &str, output: &Output) -> Result<Value, FactError> {
        serde_json::from_slice(&output.stdout).map_err(|e| FactError::Transport {
            id: id.to_string(),
            reason: format!("invalid JSON from aws cli: {e}"),
        })
    }
}

impl FactSource for AwsCli {
    fn bucket_encryption(&self, id: &str) -> Result<Facts, FactError> {
        let output = self.run(id, &["s3api", "get-bucket-encryption", "--bucket", id])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // A bucket with no encryption configuration is a finding, not a
            // failure.
            if stderr.contains(SSE_NOT_FOUND) {
                return Ok(facts(&[("status", json!("unencrypted"))]));
            }
            return Err(classify_failure(id, &stderr));
        }
        let response = self.parse(id, &output)?;
        Ok(bucket_facts(&response))
    }

    fn table_encryption(&self, id: &str) -> Result<Facts, FactError> {
        let output = self.run(id, &["dynamodb", "describe-table", "--table-name", id])?;
        if !output.status.success() {
            return Err(classify_failure(id, &String::from_utf8_lossy(&output.stderr)));
        }
        let response = self.parse(id, &output)?;
        Ok(table_facts(&response))
    }

    fn instance_encryption(&self, id: &str) -> Result<Facts, FactError> {
        let output = self.run(
            id,
            &["rds", "describe-db-instances", "--db-instance-identifier", id],
        )?;
        if !output.status.success() {
            return Err(classify_failure(id, &String::from_utf8_lossy(&output.stderr)));
        }
        let response = self.parse(id, &output)?;
        instance_facts(id, &response)
    }
}

/// Ask the CLI for the profile's default region. Best effort; a missing or
/// unconfigured region resolves to `None`.
fn configured_region(bin: &PathBuf, profile: Option<&str>) -> Option<String> {
    let mut cmd = Command::new(bin);
    cmd.args(["configure", "get", "region"]);
    if let Some(profile) = profile {
        cmd.args(["--profile", profile]);
    }
    let output = cmd.output().ok()?;
    if !output.status.success() {
        return None;
    }
    let region = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!region.is_empty()).then_some(region)
}

/// Map a failed CLI invocation to a fact error based on the stderr text.
fn classify_failure(id: &str, stderr: &str) -> FactError {
    if NOT_FOUND_MARKERS.iter().any(|m| stderr.contains(m)) {
        return FactError::NotFound(id.to_string());
    }
    if ACCESS_DENIED_MARKERS.iter().any(|m| stderr.contains(m)) {
        return FactError::AccessDenied(id.to_string());
    }
    FactError::Transport {
        id: id.to_string(),
        reason: stderr.trim().to_string(),
    }
}

/// Map a `get-bucket-encryption` response to facts.
pub fn bucket_facts(response: &Value) -> Facts {
    let rules = response["ServerSideEncryptionConfiguration"]["Rules"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    let Some(rule) = rules.first() else {
        return facts(&[("status", json!("unencrypted"))]);
    };

    let default = &rule["ApplyServerSideEncryptionByDefault"];
    let algorithm = default["SSEAlgorithm"].as_str();
    let kms_key_id = default["KMSMasterKeyID"].as_str();

    match algorithm {
        Some("AES256") => facts(&[
            ("status", json!("encrypted")),
            ("type", json!("server_side")),
            ("algorithm", json!("AES256")),
        ]),
        Some("aws:kms") => {
            let key_type = if kms_key_id.is_some() {
                "customer_managed"
            } else {
                "aws_managed"
            };
            let mut out = facts(&[
                ("status", json!("encrypted")),
                (
                    "type",
                    if kms_key_id.is_some() {
                        json!("customer_managed_key")
                    } else {
                        json!("server_side")
                    },
                ),
                ("algorithm", json!("aws:kms")),
            ]);
            if let Some(key_id) = kms_key_id {
                out.insert("key_id".to_string(), json!(key_id));
            }
            out.insert("key_type".to_string(), json!(key_type));
            out
        }
        other => {
            let mut out = facts(&[("status", json!("unknown"))]);
            if let Some(algorithm) = other {
                out.insert("algorithm".to_string(), json!(algorithm));
            }
            out
        }
    }
}

/// Map a `describe-table` response to facts.
///
/// DynamoDB tables are always encrypted at rest; a missing or disabled
/// `SSEDescription` means the table uses the default AWS owned key.
pub fn table_facts(response: &Value) -> Facts {
    let sse = &response["Table"]["SSEDescription"];
    let status = sse["Status"].as_str();
    let sse_type = sse["SSEType"].as_str();
    let kms_key_id = sse["KMSMasterKeyArn"].as_str();

    if status == Some("ENABLED") {
        if sse_type == Some("KMS") {
            if let Some(key_id) = kms_key_id {
                return facts(&[
                    ("status", json!("encrypted")),
                    ("type", json!("customer_managed_key")),
                    ("key_id", json!(key_id)),
                ]);
            }
        }
        return facts(&[("status", json!("encrypted")), ("type", json!("server_side"))]);
    }

    facts(&[
        ("status", json!("encrypted")),
        ("type", json!("server_side")),
        ("note", json!("Default AWS owned key encryption")),
    ])
}

/// Map a `describe-db-instances` response to facts.
pub fn instance_facts(id: &str, response: &Value) -> Result<Facts, FactError> {
    let instances = response["DBInstances"].as_array().cloned().unwrap_or_default();
    let Some(instance) = instances.first() else {
        return Err(FactError::NotFound(id.to_string()));
    };

    let encrypted = instance["StorageEncrypted"].as_bool().unwrap_or(false);
    let kms_key_id = instance["KmsKeyId"].as_str();

    if !encrypted {
        return Ok(facts(&[("status", json!("unencrypted"))]));
    }

    match kms_key_id {
        Some(key_id) => Ok(facts(&[
            ("status", json!("encrypted")),
            ("type", json!("customer_managed_key")),
            ("key_id", json!(key_id)),
        ])),
        None => Ok(facts(&[
            ("status", json!("encrypted")),
            ("type", json!("server_side")),
        ])),
    }
}

fn facts(pairs: &[(&str, Value)]) -> Facts {
    let mut map = Facts::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), value.clone());
    }
    map
}
