use std::path::PathBuf;

use apigen_codegen::{GenerateOptions, ModelDescriptor, ResourceLayout};
use clap::Args;
use eyre::Result;
use tracing::info;

use crate::{project::Project, prompt::Prompter};

/// Options shared by the `make-*` commands.
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Resource name, optionally namespaced (e.g. `Blog`, `Shop/Product`)
    pub resource: Option<String>,

    /// Panel to generate for (defaults to the only panel, or asks)
    #[arg(long)]
    pub panel: Option<String>,

    /// Resource namespace to generate in, when the panel has several
    #[arg(long)]
    pub namespace: Option<String>,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; fail on missing or ambiguous choices instead
    #[arg(short = 'n', long)]
    pub no_interaction: bool,

    /// Path to apigen.toml (defaults to ./apigen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ResourceArgs {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions { force: self.force }
    }

    /// Load the project and resolve the resource into a layout.
    pub fn resolve(&self) -> Result<(Project, ResourceLayout)> {
        let project = Project::load(self.config.as_deref())?;
        let prompter = Prompter::new(self.no_interaction);
        let layout = self.resolve_in(&project, &prompter)?;
        Ok((project, layout))
    }

    pub(crate) fn resolve_in(
        &self,
        project: &Project,
        prompter: &Prompter,
    ) -> Result<ResourceLayout> {
        let manifest = &project.manifest;

        let panel = prompter.panel(manifest, self.panel.as_deref())?;
        let input = prompter.resource(self.resource.as_deref())?;
        let locations = manifest.locations(&panel);
        let known: Vec<_> = locations.iter().map(|l| l.namespace.clone()).collect();

        let model = ModelDescriptor::resolve(&input, &known, &manifest.project.default_namespace);
        let location = prompter.location(&locations, model.anchor(), self.namespace.as_deref())?;
        info!(
            panel = %panel,
            namespace = %location.namespace,
            resource = %model.resource_class(),
            "resolved target"
        );

        Ok(ResourceLayout::new(&model, &location, &project.root))
    }
}
