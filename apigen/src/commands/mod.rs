mod completions;
mod info;
mod init;
mod make_request;
mod make_service;
mod make_transformer;
mod resource;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use info::InfoCommand;
use init::InitCommand;
use make_request::MakeRequestCommand;
use make_service::MakeServiceCommand;
use make_transformer::MakeTransformerCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apigen_manifest::Result<T> {
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
#[command(name = "apigen")]
#[command(version)]
#[command(about = "Scaffold REST API services for Filament resources")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::MakeService(cmd) => cmd.run(),
            Commands::MakeTransformer(cmd) => cmd.run(),
            Commands::MakeRequest(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an API service, its handlers, transformer and requests
    #[command(visible_alias = "service")]
    MakeService(MakeServiceCommand),

    /// Create the API transformer for a resource
    MakeTransformer(MakeTransformerCommand),

    /// Create an API request object for a resource
    MakeRequest(MakeRequestCommand),

    /// Write a starter apigen.toml
    Init(InitCommand),

    /// Show panels, namespaces and directories
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
