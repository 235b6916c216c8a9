//! Interactive choices, with hard errors when prompting is not possible.

use std::io::IsTerminal;

use apigen_codegen::ResourceInput;
use apigen_core::Namespace;
use apigen_manifest::{Manifest, ResourceLocation};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result, bail};
use tracing::debug;

/// Resolves missing or ambiguous choices.
///
/// When interactive, asks the user. Otherwise a missing or ambiguous choice
/// is an error naming the flag that settles it; nothing is ever guessed.
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    /// Interactive unless `no_interaction` is set or stdin is not a terminal.
    pub fn new(no_interaction: bool) -> Self {
        Self {
            interactive: !no_interaction && std::io::stdin().is_terminal(),
        }
    }

    #[cfg(test)]
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    /// The resource to generate for.
    pub fn resource(&self, arg: Option<&str>) -> Result<ResourceInput> {
        if let Some(raw) = arg {
            let input = ResourceInput::new(raw);
            if input.is_blank() {
                bail!("resource name cannot be empty");
            }
            return Ok(input);
        }

        if !self.interactive {
            bail!("a resource name is required when running non-interactively (e.g. `Blog`)");
        }

        let raw = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("What is the resource name? (e.g. Blog)")
            .validate_with(|value: &String| -> std::result::Result<(), &str> {
                if ResourceInput::new(value.as_str()).is_blank() {
                    Err("the resource name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .wrap_err("Failed to read resource name")?;

        Ok(ResourceInput::new(raw))
    }

    /// The panel whose resource locations are used.
    pub fn panel(&self, manifest: &Manifest, flag: Option<&str>) -> Result<String> {
        let ids: Vec<&str> = manifest.panel_ids().collect();

        if let Some(id) = flag {
            if !manifest.has_panel(id) {
                bail!("unknown panel '{}' (available: {})", id, ids.join(", "));
            }
            return Ok(id.to_string());
        }

        match ids.as_slice() {
            [] => bail!("no panels are configured"),
            [only] => Ok(only.to_string()),
            _ if !self.interactive => bail!(
                "several panels are configured ({}); choose one with --panel",
                ids.join(", ")
            ),
            _ => {
                let default = manifest
                    .default_panel_id()
                    .and_then(|d| ids.iter().position(|id| *id == d))
                    .unwrap_or(0);
                let selection = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Which panel would you like to create this for?")
                    .items(&ids)
                    .default(default)
                    .interact()
                    .wrap_err("Failed to get panel selection")?;
                Ok(ids[selection].to_string())
            }
        }
    }

    /// The location generated files go to.
    ///
    /// Input qualified with a known namespace always uses that namespace's
    /// location; `--namespace` only applies to relative input.
    pub fn location(
        &self,
        locations: &[ResourceLocation],
        anchor: Option<&Namespace>,
        flag: Option<&str>,
    ) -> Result<ResourceLocation> {
        if let Some(location) =
            anchor.and_then(|anchor| locations.iter().find(|l| &l.namespace == anchor))
        {
            debug!(namespace = %location.namespace, "location taken from qualified input");
            return Ok(location.clone());
        }

        let namespaces: Vec<String> = locations.iter().map(|l| l.namespace.to_string()).collect();

        if let Some(raw) = flag {
            let wanted = Namespace::parse(raw);
            return match locations.iter().find(|l| l.namespace == wanted) {
                Some(location) => Ok(location.clone()),
                None => bail!(
                    "unknown namespace '{}' (available: {})",
                    wanted,
                    namespaces.join(", ")
                ),
            };
        }

        match locations {
            [] => bail!("no resource locations are configured"),
            [only] => Ok(only.clone()),
            _ if !self.interactive => bail!(
                "several namespaces are configured ({}); choose one with --namespace",
                namespaces.join(", ")
            ),
            _ => {
                let selection = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Which namespace would you like to create this in?")
                    .items(&namespaces)
                    .default(0)
                    .interact()
                    .wrap_err("Failed to get namespace selection")?;
                Ok(locations[selection].clone())
            }
        }
    }
}
