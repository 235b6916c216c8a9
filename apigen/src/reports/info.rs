//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Manifest file, or `None` when running on built-in defaults.
    pub config_path: Option<PathBuf>,
    /// Project root directory.
    pub root: PathBuf,
    pub default_namespace: String,
    pub default_directory: String,
    pub route_prefix: String,
    /// Stub override directory.
    pub stubs: Option<PathBuf>,
    pub panels: Vec<PanelInfo>,
}

/// A configured panel.
#[derive(Debug)]
pub struct PanelInfo {
    pub id: String,
    /// Whether this is the default panel.
    pub default: bool,
    /// Effective resource locations.
    pub locations: Vec<LocationInfo>,
}

/// A namespace/directory pair.
#[derive(Debug)]
pub struct LocationInfo {
    pub namespace: String,
    pub directory: String,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        // Metadata
        let config = match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "(built-in defaults)".to_string(),
        };
        out.preformatted(&format!("  Config      {}", config));
        out.preformatted(&format!("  Root        {}", self.root.display()));
        out.preformatted(&format!("  Routes      {}", self.route_prefix));
        if let Some(stubs) = &self.stubs {
            out.preformatted(&format!("  Stubs       {}", stubs.display()));
        }
        out.newline();

        // Defaults
        out.preformatted("  Defaults");
        out.preformatted("  ────────");
        out.preformatted(&format!("  namespace   {}", self.default_namespace));
        out.preformatted(&format!("  directory   {}", self.default_directory));
        out.newline();

        // Panels
        out.preformatted("  Panels");
        out.preformatted("  ──────");
        for panel in &self.panels {
            let marker = if panel.default { " (default)" } else { "" };
            out.preformatted(&format!("  {}{}", panel.id, marker));
            for location in &panel.locations {
                out.preformatted(&format!(
                    "    └─ {} → {}",
                    location.namespace, location.directory
                ));
            }
        }
    }
}
