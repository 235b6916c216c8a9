//! Manifest types and parsing for apigen.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

use apigen_core::Namespace;
pub use file::{ApigenToml, starter_manifest};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
pub use validate::ParseContext;

/// Conventional manifest file name.
pub const MANIFEST_FILE: &str = "apigen.toml";

/// Namespace used when a panel declares no resource locations.
pub const DEFAULT_NAMESPACE: &str = "App\\Filament\\Resources";

/// Directory paired with [`DEFAULT_NAMESPACE`].
pub const DEFAULT_DIRECTORY: &str = "app/Filament/Resources";

/// Route group generated services are registered under.
pub const DEFAULT_ROUTE_PREFIX: &str = "/api";

/// Panel id of the built-in manifest.
pub const DEFAULT_PANEL: &str = "admin";

/// Root manifest for apigen.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Panels in declaration order, keyed by panel id
    #[serde(default)]
    pub panels: IndexMap<String, Panel>,
}

/// Project-wide settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Namespace stripped from duplicated qualified input and used as a fallback
    #[serde(default = "default_namespace")]
    pub default_namespace: Namespace,

    /// Directory paired with the default namespace, relative to the project root
    #[serde(default = "default_directory")]
    pub default_directory: PathBuf,

    /// Route group reported after generation
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    /// Directory holding stub overrides, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stubs: Option<PathBuf>,
}

fn default_namespace() -> Namespace {
    Namespace::parse(DEFAULT_NAMESPACE)
}

fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_DIRECTORY)
}

fn default_route_prefix() -> String {
    DEFAULT_ROUTE_PREFIX.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            default_directory: default_directory(),
            route_prefix: default_route_prefix(),
            stubs: None,
        }
    }
}

impl ProjectConfig {
    /// The location used when a panel declares none.
    pub fn default_location(&self) -> ResourceLocation {
        ResourceLocation {
            namespace: self.default_namespace.clone(),
            directory: self.default_directory.clone(),
        }
    }
}

/// A panel and the places its resources live
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Panel {
    /// Preselected when choosing between several panels
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,

    /// Namespace/directory pairs, first one is the primary location
    #[serde(default)]
    pub resources: Vec<ResourceLocation>,
}

/// A resource namespace and the directory its classes are written to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceLocation {
    pub namespace: Namespace,
    pub directory: PathBuf,
}

impl Default for Manifest {
    fn default() -> Self {
        let mut panels = IndexMap::new();
        panels.insert(
            DEFAULT_PANEL.to_string(),
            Panel {
                default: true,
                resources: Vec::new(),
            },
        );
        Self {
            project: ProjectConfig::default(),
            panels,
        }
    }
}

impl Manifest {
    /// Check if a panel exists
    pub fn has_panel(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    /// Panel ids in declaration order
    pub fn panel_ids(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }

    /// The panel marked `default = true`, else the first declared panel
    pub fn default_panel_id(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|(_, panel)| panel.default)
            .or_else(|| self.panels.first())
            .map(|(id, _)| id.as_str())
    }

    /// Resource locations of a panel, falling back to the project default
    /// when the panel declares none.
    pub fn locations(&self, panel_id: &str) -> Vec<ResourceLocation> {
        match self.panels.get(panel_id) {
            Some(panel) if !panel.resources.is_empty() => panel.resources.clone(),
            _ => vec![self.project.default_location()],
        }
    }
}
