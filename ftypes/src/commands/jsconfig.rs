use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use ftypes_schema::{CONFIG_FILE, Config, JSCONFIG_FILE, JsConfig, SfdxProject};

use super::UnwrapOrExit;
use crate::{
    ops::{self, jsconfig::JsconfigOptions},
    reports::{Report, TerminalOutput, print_json},
};

#[derive(Args)]
pub struct JsconfigCommand {
    /// Directory component paths are resolved from, relative to the project root
    /// (defaults to .)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Start from the default template instead of the existing jsconfig.json
    #[arg(long)]
    pub init: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to ftypes.toml (defaults to ./ftypes.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

impl JsconfigCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::open_or_default(&self.config).unwrap_or_exit();
        let cwd = std::env::current_dir().wrap_err("failed to read the current directory")?;
        let project = SfdxProject::resolve(&cwd).unwrap_or_exit();

        let base_url = self
            .base_url
            .clone()
            .or_else(|| {
                config
                    .jsconfig
                    .base_url
                    .as_ref()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .unwrap_or_else(|| ".".to_string());

        let path = project.root().join(JSCONFIG_FILE);
        let existing = if self.init {
            None
        } else {
            JsConfig::open(&path).unwrap_or_exit()
        };

        let report = ops::jsconfig(
            &project,
            JsconfigOptions {
                path: &path,
                existing,
                base_url: &base_url,
            },
        )?;

        if self.json {
            print_json(&report)
        } else {
            report.render(&mut TerminalOutput::new());
            Ok(())
        }
    }
}
