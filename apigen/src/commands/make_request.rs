use apigen_core::{is_php_identifier, to_studly_case};
use clap::Args;
use eyre::{Result, bail};

use super::resource::ResourceArgs;
use crate::{
    ops::{self, MakeKind, MakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct MakeRequestCommand {
    /// Request kind, used as the class prefix (e.g. `Archive` -> ArchiveBlogRequest)
    pub name: String,

    #[command(flatten)]
    pub args: ResourceArgs,
}

impl MakeRequestCommand {
    pub fn run(&self) -> Result<()> {
        let kind = request_kind(&self.name)?;
        let (project, layout) = self.args.resolve()?;

        let report = ops::make(
            &project,
            &layout,
            &MakeKind::Request(kind),
            MakeOptions {
                generate: self.args.options(),
                dry_run: self.args.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

/// Studly request kind, which must start a valid PHP class name.
fn request_kind(name: &str) -> Result<String> {
    let kind = to_studly_case(name.trim());
    if kind.is_empty() || !is_php_identifier(&kind) {
        bail!(
            "invalid request name '{}'; use letters and digits, e.g. `Archive`",
            name
        );
    }
    Ok(kind)
}
