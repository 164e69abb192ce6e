use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use ftypes_codegen_typescript::Generator;
use ftypes_schema::{CONFIG_FILE, Config, is_api_version};
use tracing::info;

use super::UnwrapOrExit;
use crate::{
    format::Prettier,
    ops::{self, types::TypesOptions},
    org::{DescribeDir, SchemaSource, SfCli},
    reports::{Report, TerminalOutput, print_json},
};

const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_JOBS: usize = 4;

#[derive(Args)]
pub struct TypesCommand {
    /// sObject API name or wildcard pattern such as 'Invoice*__c' (repeatable;
    /// defaults to every customizable sObject)
    #[arg(short, long = "sobject", value_name = "NAME")]
    pub sobjects: Vec<String>,

    /// Username or alias of the org to describe (defaults to the sf CLI default org)
    #[arg(short = 'o', long)]
    pub target_org: Option<String>,

    /// API version used for describe calls, e.g. 61.0
    #[arg(short, long)]
    pub api_version: Option<String>,

    /// Directory receiving the .d.ts files (defaults to ./output)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Read describe results from <DIR>/<Name>.json instead of an org
    #[arg(long, value_name = "DIR", conflicts_with_all = ["target_org", "api_version"])]
    pub from_dir: Option<PathBuf>,

    /// Format output with prettier (runs npx)
    #[arg(long)]
    pub prettier: bool,

    /// Wrap each file in `declare module '<PREFIX><Name>'`
    #[arg(long, value_name = "PREFIX")]
    pub module_prefix: Option<String>,

    /// Number of sObjects processed in parallel (defaults to 4)
    #[arg(short, long, value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to ftypes.toml (defaults to ./ftypes.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

fn parse_jobs(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(jobs) => Ok(jobs),
        Err(e) => Err(e.to_string()),
    }
}

impl TypesCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::open_or_default(&self.config).unwrap_or_exit();
        let settings = &config.types;

        let sobjects = if self.sobjects.is_empty() {
            settings.sobjects.clone()
        } else {
            self.sobjects.clone()
        };
        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| settings.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let jobs = self.jobs.or(settings.jobs()).unwrap_or(DEFAULT_JOBS);
        let prettier = (self.prettier || settings.prettier.unwrap_or(false)).then(Prettier::new);

        let mut generator = Generator::new();
        if let Some(prefix) = self.module_prefix.clone().or_else(|| settings.module_prefix.clone())
        {
            generator = generator.module_prefix(prefix);
        }

        let source: Box<dyn SchemaSource> = match &self.from_dir {
            Some(dir) => Box::new(DescribeDir::new(dir)),
            None => Box::new(self.sf_cli(&config)?),
        };

        let report = ops::types(
            source.as_ref(),
            TypesOptions {
                sobjects: &sobjects,
                output_dir: &output_dir,
                generator: &generator,
                prettier: prettier.as_ref(),
                jobs,
                dry_run: self.dry_run,
            },
        )?;
        info!(
            objects = report.objects.len(),
            written = report.written(),
            "types finished"
        );

        if self.json {
            print_json(&report)
        } else {
            report.render(&mut TerminalOutput::new());
            Ok(())
        }
    }

    fn sf_cli(&self, config: &Config) -> Result<SfCli> {
        let api_version = self
            .api_version
            .clone()
            .or_else(|| config.types.api_version().map(String::from));
        if let Some(version) = &api_version
            && !is_api_version(version)
        {
            bail!("invalid API version '{}'; expected a value like 61.0", version);
        }

        let target_org = self
            .target_org
            .clone()
            .or_else(|| config.types.target_org.clone());

        Ok(SfCli::new().target_org(target_org).api_version(api_version))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::commands::Cli;

    #[test]
    fn test_jobs_must_be_positive() {
        assert!(Cli::try_parse_from(["ftypes", "types", "-j", "0"]).is_err());
        assert!(Cli::try_parse_from(["ftypes", "types", "-j", "2"]).is_ok());
    }

    #[test]
    fn test_from_dir_conflicts_with_org() {
        let result = Cli::try_parse_from(["ftypes", "types", "--from-dir", "d", "-o", "dev"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repeated_sobject_flags() {
        let result = Cli::try_parse_from(["ftypes", "types", "-s", "Account", "-s", "Custom*__c"]);
        assert!(result.is_ok());
    }
}
