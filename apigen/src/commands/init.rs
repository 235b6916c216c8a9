use std::path::{Path, PathBuf};

use apigen_core::{File, Overwrite, WriteResult};
use apigen_manifest::{DEFAULT_PANEL, Manifest, starter_manifest};
use clap::Args;
use eyre::{Result, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,

    /// Id of the panel to declare
    #[arg(long, default_value = DEFAULT_PANEL)]
    pub panel: String,

    /// Replace an existing manifest
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let result = Self::write_manifest(&self.config, &self.panel, self.force)?;

        let verb = match result {
            WriteResult::Overwritten => "Replaced",
            _ => "Created",
        };
        println!("{} {}", verb, self.config.display());
        println!();
        println!("Next steps:");
        println!("  edit the [panels.{}] resource locations", self.panel);
        println!("  apigen make-service Blog");

        Ok(())
    }

    fn write_manifest(path: &Path, panel: &str, force: bool) -> Result<WriteResult> {
        let content = starter_manifest(panel);
        // Reject panel ids that would not parse back
        Manifest::from_str_with_filename(&content, &path.display().to_string()).unwrap_or_exit();

        if path.exists() && !force {
            bail!(
                "'{}' already exists; re-run with --force to replace it",
                path.display()
            );
        }

        let overwrite = if force {
            Overwrite::Always
        } else {
            Overwrite::Never
        };
        File::new(path, content).with_overwrite(overwrite).write()
    }
}
