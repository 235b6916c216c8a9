//! Info operation - project information.

use crate::{
    project::Project,
    reports::{InfoReport, LocationInfo, PanelInfo},
};

/// Execute the info operation.
///
/// Panels without resource locations report the project default location,
/// which is what generation falls back to.
pub fn info(project: &Project) -> InfoReport {
    let manifest = &project.manifest;
    let default_panel = manifest.default_panel_id();

    let panels = manifest
        .panel_ids()
        .map(|id| PanelInfo {
            id: id.to_string(),
            default: Some(id) == default_panel,
            locations: manifest
                .locations(id)
                .into_iter()
                .map(|l| LocationInfo {
                    namespace: l.namespace.to_string(),
                    directory: l.directory.display().to_string(),
                })
                .collect(),
        })
        .collect();

    InfoReport {
        config_path: project
            .config_path
            .as_ref()
            .map(|path| std::fs::canonicalize(path).unwrap_or_else(|_| path.clone())),
        root: project.root.clone(),
        default_namespace: manifest.project.default_namespace.to_string(),
        default_directory: manifest.project.default_directory.display().to_string(),
        route_prefix: manifest.project.route_prefix.clone(),
        stubs: manifest.project.stubs.as_ref().map(|dir| project.root.join(dir)),
        panels,
    }
}
