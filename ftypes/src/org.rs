//! Sources of sObject describe results.
//!
//! [`SfCli`] asks a connected org through the Salesforce CLI; [`DescribeDir`]
//! reads describe documents saved to disk.

use std::{path::PathBuf, process::Command};

use eyre::{Result, WrapErr, bail};
use ftypes_schema::ObjectDescription;
use serde::Deserialize;
use tracing::debug;

/// Query listing every object whose schema can be customized.
pub const CUSTOMIZABLE_SOBJECTS_QUERY: &str = "SELECT QualifiedApiName FROM EntityDefinition \
     WHERE IsCustomizable = true ORDER BY QualifiedApiName";

/// Something that can list and describe sObjects.
///
/// Implementations are shared between worker threads.
pub trait SchemaSource: Sync {
    /// API names of every object eligible for generation.
    fn list_sobjects(&self) -> Result<Vec<String>>;

    /// The describe result for one object.
    fn describe(&self, sobject: &str) -> Result<ObjectDescription>;
}

/// `sf` CLI client.
#[derive(Debug, Clone)]
pub struct SfCli {
    program: String,
    target_org: Option<String>,
    api_version: Option<String>,
}

impl Default for SfCli {
    fn default() -> Self {
        Self {
            program: "sf".to_string(),
            target_org: None,
            api_version: None,
        }
    }
}

impl SfCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Username or alias passed as `--target-org`.
    pub fn target_org(mut self, org: Option<String>) -> Self {
        self.target_org = org;
        self
    }

    /// API version passed as `--api-version`.
    pub fn api_version(mut self, version: Option<String>) -> Self {
        self.api_version = version;
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(org) = &self.target_org {
            cmd.args(["--target-org", org]);
        }
        if let Some(version) = &self.api_version {
            cmd.args(["--api-version", version]);
        }
        cmd.arg("--json");
        cmd
    }

    /// Run `sf <args> --json` and return the `result` payload.
    fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        debug!(command = %command_line, "running");

        let output = self.command(args).output().wrap_err_with(|| {
            format!("failed to run '{}'; is the Salesforce CLI installed?", self.program)
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match serde_json::from_str::<serde_json::Value>(&stdout) {
            Ok(value) => read_envelope(&command_line, value),
            Err(_) if !output.status.success() => {
                bail!(
                    "'{}' failed ({}): {}",
                    command_line,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                )
            }
            Err(e) => Err(e).wrap_err_with(|| format!("'{}' printed invalid JSON", command_line)),
        }
    }
}

impl SchemaSource for SfCli {
    fn list_sobjects(&self) -> Result<Vec<String>> {
        let result = self.run_json(&["data", "query", "--query", CUSTOMIZABLE_SOBJECTS_QUERY])?;
        parse_entity_names(result)
    }

    fn describe(&self, sobject: &str) -> Result<ObjectDescription> {
        let result = self.run_json(&["sobject", "describe", "--sobject", sobject])?;
        Ok(ObjectDescription::from_value(sobject, result)?)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: serde_json::Value,
}

/// Unwrap the `{ "status", "result" }` envelope, failing on a non-zero status.
fn read_envelope(command: &str, value: serde_json::Value) -> Result<serde_json::Value> {
    let envelope: Envelope = serde_json::from_value(value)
        .wrap_err_with(|| format!("'{}' printed an unexpected response", command))?;

    if envelope.status != 0 {
        let message = envelope.message.unwrap_or_else(|| "unknown error".to_string());
        match envelope.name {
            Some(name) => bail!("'{}' failed: {}: {}", command, name, message),
            None => bail!("'{}' failed: {}", command, message),
        }
    }

    Ok(envelope.result)
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    records: Vec<EntityDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EntityDefinition {
    qualified_api_name: String,
}

fn parse_entity_names(result: serde_json::Value) -> Result<Vec<String>> {
    let query: QueryResult =
        serde_json::from_value(result).wrap_err("unexpected EntityDefinition query result")?;
    Ok(query
        .records
        .into_iter()
        .map(|r| r.qualified_api_name)
        .collect())
}

/// Directory of saved describe documents, one `<Name>.json` per object.
#[derive(Debug, Clone)]
pub struct DescribeDir {
    dir: PathBuf,
}

impl DescribeDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, sobject: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sobject))
    }
}

impl SchemaSource for DescribeDir {
    fn list_sobjects(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir)
            .wrap_err_with(|| format!("failed to read '{}'", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn describe(&self, sobject: &str) -> Result<ObjectDescription> {
        let path = self.path_for(sobject);
        debug!(path = %path.display(), "reading describe document");
        let json = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("no describe document for '{}'", sobject))?;
        Ok(ObjectDescription::from_json(sobject, &json)?)
    }
}
