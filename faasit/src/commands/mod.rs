mod check;
mod completions;
mod info;
mod resolve;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use faasit_spec::IrFile;
use info::InfoCommand;
use resolve::ResolveCommand;

/// Extension trait for exiting on spec errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for faasit_spec::Result<T> {
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

/// Location of the IR document, shared by every command that reads one.
#[derive(Args)]
pub(crate) struct IrArgs {
    /// Path to the IR document (JSON, or TOML when it ends in .toml)
    #[arg(short, long, default_value = "faasit.ir.json")]
    pub ir: PathBuf,
}

impl IrArgs {
    pub fn open(&self) -> IrFile {
        IrFile::open(&self.ir).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "faasit")]
#[command(version)]
#[command(about = "Validate and resolve faasit application specs")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Resolve(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the application and run lints
    Check(CheckCommand),

    /// Show a summary of the application
    Info(InfoCommand),

    /// Print the resolved application as JSON
    Resolve(ResolveCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
