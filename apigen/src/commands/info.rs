use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    project::Project,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::load(self.config.as_deref())?;

        let report = ops::info(&project);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
