use clap::Args;
use eyre::Result;

use super::resource::ResourceArgs;
use crate::{
    ops::{self, MakeKind, MakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct MakeTransformerCommand {
    #[command(flatten)]
    pub args: ResourceArgs,
}

impl MakeTransformerCommand {
    pub fn run(&self) -> Result<()> {
        let (project, layout) = self.args.resolve()?;

        let report = ops::make(
            &project,
            &layout,
            &MakeKind::Transformer,
            MakeOptions {
                generate: self.args.options(),
                dry_run: self.args.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
