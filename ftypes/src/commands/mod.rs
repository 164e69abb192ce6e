mod completions;
mod jsconfig;
mod types;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use jsconfig::JsconfigCommand;
use types::TypesCommand;

/// Extension trait for exiting on input-file errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ftypes_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ftypes")]
#[command(version)]
#[command(about = "Generate TypeScript declarations for Salesforce sObjects")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Types(cmd) => cmd.run(),
            Commands::Jsconfig(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .d.ts declarations from sObject describe results
    Types(TypesCommand),

    /// Create or update jsconfig.json for Lightning Web Components
    Jsconfig(JsconfigCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
