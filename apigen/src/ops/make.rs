//! Make operation - render and write scaffolds for one resource.

use apigen_codegen::{
    ApiServiceScaffold, CollisionError, GenerateOptions, Generator, RequestScaffold,
    ResourceLayout, ResourceScaffold, TransformerScaffold,
};
use color_eyre::Section;
use eyre::Result;

use crate::{
    project::Project,
    reports::{MakeReport, MakeResult, PreviewEntry, WrittenFile},
};

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakeKind {
    /// API service, handlers and their sibling files
    Service,
    Transformer,
    /// A single request object of the given kind
    Request(String),
}

impl MakeKind {
    fn scaffold(&self) -> Box<dyn ResourceScaffold> {
        match self {
            MakeKind::Service => Box::new(ApiServiceScaffold),
            MakeKind::Transformer => Box::new(TransformerScaffold),
            MakeKind::Request(name) => Box::new(RequestScaffold::new([name])),
        }
    }

    /// Scaffolds run before the primary one.
    fn siblings(&self) -> Vec<Box<dyn ResourceScaffold>> {
        match self {
            MakeKind::Service => vec![
                Box::new(TransformerScaffold),
                Box::new(RequestScaffold::crud()),
            ],
            _ => Vec::new(),
        }
    }

    /// How the generated thing is named in the report.
    fn describe(&self, layout: &ResourceLayout) -> String {
        match self {
            MakeKind::Service => "API".to_string(),
            MakeKind::Transformer => "transformer".to_string(),
            MakeKind::Request(name) => layout.request_class(name),
        }
    }
}

/// Options for the make operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeOptions {
    pub generate: GenerateOptions,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the make operation.
pub fn make(
    project: &Project,
    layout: &ResourceLayout,
    kind: &MakeKind,
    opts: MakeOptions,
) -> Result<MakeReport> {
    let renderer = project.renderer();
    let generator = Generator::new(&renderer, opts.generate);

    let primary = kind.scaffold();
    let owned_siblings = kind.siblings();
    let siblings: Vec<&dyn ResourceScaffold> =
        owned_siblings.iter().map(|s| s.as_ref()).collect();

    let result = if opts.dry_run {
        let files = generator.preview(primary.as_ref(), &siblings, layout)?;
        MakeResult::Preview(
            files
                .into_iter()
                .map(|f| PreviewEntry {
                    path: project.display_path(&f.path),
                    content: f.content,
                    action: f.action,
                    conflict: f.conflict,
                })
                .collect(),
        )
    } else {
        let generated = generator
            .generate(primary.as_ref(), &siblings, layout)
            .map_err(|err| {
                if err.downcast_ref::<CollisionError>().is_some() {
                    err.suggestion("re-run with --force to overwrite them")
                } else {
                    err
                }
            })?;
        MakeResult::Written(
            generated
                .files
                .into_iter()
                .map(|f| WrittenFile {
                    path: project.display_path(&f.path),
                    result: f.result,
                })
                .collect(),
        )
    };

    Ok(MakeReport {
        what: kind.describe(layout),
        resource_class: layout.resource_class(),
        route_prefix: (*kind == MakeKind::Service)
            .then(|| project.manifest.project.route_prefix.clone()),
        result,
    })
}

#[cfg(test)]
mod tests {
    use apigen_codegen::{ModelDescriptor, ResourceInput};
    use apigen_core::WriteResult;
    use apigen_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    fn project(root: &std::path::Path) -> Project {
        Project {
            root: root.to_path_buf(),
            config_path: None,
            manifest: Manifest::default(),
        }
    }

    fn layout(project: &Project, raw: &str) -> ResourceLayout {
        let location = project.manifest.project.default_location();
        let model = ModelDescriptor::resolve(
            &ResourceInput::new(raw),
            std::slice::from_ref(&location.namespace),
            &project.manifest.project.default_namespace,
        );
        ResourceLayout::new(&model, &location, &project.root)
    }

    #[test]
    fn test_make_service_reports_route_group() {
        let temp = TempDir::new().unwrap();
        let project = project(temp.path());

        let report = make(
            &project,
            &layout(&project, "Blog"),
            &MakeKind::Service,
            MakeOptions::default(),
        )
        .unwrap();

        assert_eq!(report.what, "API");
        assert_eq!(report.resource_class, "BlogResource");
        assert_eq!(report.route_prefix.as_deref(), Some("/api"));
        match report.result {
            MakeResult::Written(files) => {
                assert_eq!(files.len(), 9);
                assert!(files.iter().all(|f| f.result == WriteResult::Created));
                assert!(files.iter().all(|f| f.path.starts_with("app")));
            }
            MakeResult::Preview(_) => panic!("expected written files"),
        }
    }

    #[test]
    fn test_make_request_names_the_class() {
        let temp = TempDir::new().unwrap();
        let project = project(temp.path());

        let report = make(
            &project,
            &layout(&project, "Blog"),
            &MakeKind::Request("archive".to_string()),
            MakeOptions::default(),
        )
        .unwrap();

        assert_eq!(report.what, "ArchiveBlogRequest");
        assert!(report.route_prefix.is_none());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let project = project(temp.path());
        let layout = layout(&project, "Category");

        let report = make(
            &project,
            &layout,
            &MakeKind::Transformer,
            MakeOptions {
                dry_run: true,
                ..Default::default()
            },
        )
        .unwrap();

        match report.result {
            MakeResult::Preview(files) => assert_eq!(files.len(), 1),
            MakeResult::Written(_) => panic!("expected preview"),
        }
        assert!(!layout.transformer_path().exists());
    }

    #[test]
    fn test_collision_keeps_its_type() {
        let temp = TempDir::new().unwrap();
        let project = project(temp.path());
        let layout = layout(&project, "Blog");

        make(&project, &layout, &MakeKind::Transformer, MakeOptions::default()).unwrap();
        let err = make(&project, &layout, &MakeKind::Transformer, MakeOptions::default())
            .unwrap_err();

        assert!(err.downcast_ref::<CollisionError>().is_some());
    }
}
