//! `ftypes.toml` configuration.
//!
//! Every key is optional and command-line flags take precedence over the
//! values found here.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "ftypes.toml";

/// Root of `ftypes.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub types: TypesConfig,
    #[serde(default)]
    pub jsconfig: JsconfigConfig,
}

/// `[types]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypesConfig {
    /// Object names or wildcard patterns.
    #[serde(default)]
    pub sobjects: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub target_org: Option<String>,
    pub api_version: Option<Spanned<String>>,
    pub prettier: Option<bool>,
    /// Wrap each file in `declare module '<prefix><Name>'`.
    pub module_prefix: Option<String>,
    pub jobs: Option<Spanned<usize>>,
}

impl TypesConfig {
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_ref().map(|v| v.get_ref().as_str())
    }

    pub fn jobs(&self) -> Option<usize> {
        self.jobs.as_ref().map(|j| *j.get_ref())
    }
}

/// `[jsconfig]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsconfigConfig {
    pub base_url: Option<PathBuf>,
}

impl Config {
    /// Load `path`, or return the defaults when the file does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_str_with_filename(&content, &path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Parse and validate configuration text.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(jobs) = &self.types.jobs
            && *jobs.get_ref() == 0
        {
            return Err(ctx.validation_error_at("jobs must be at least 1", jobs.span()));
        }

        if let Some(version) = &self.types.api_version
            && !is_api_version(version.get_ref())
        {
            return Err(ctx.validation_error_at(
                "api_version must look like '61.0'",
                version.span(),
            ));
        }

        Ok(())
    }
}

/// True for `<major>.<minor>` with both parts numeric.
pub fn is_api_version(version: &str) -> bool {
    match version.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
