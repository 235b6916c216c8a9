//! Runs scaffolds against a layout: render, check collisions, write.

use std::path::PathBuf;

use apigen_core::{File, Overwrite, WriteResult, find_collisions};
use eyre::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::{
    layout::ResourceLayout,
    plan::FileRole,
    scaffold::{ApiServiceScaffold, RequestScaffold, ResourceScaffold, TransformerScaffold},
    stubs::StubRenderer,
};

/// Options shared by every generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Overwrite existing files instead of failing or skipping
    pub force: bool,
}

/// A rendered file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    pub role: FileRole,
    pub path: PathBuf,
    pub content: String,
    /// What writing the file would do
    pub action: WriteResult,
    /// Whether writing would fail because the file exists
    pub conflict: bool,
}

/// Outcome of writing one planned file
#[derive(Debug, Clone)]
pub struct EmittedFile {
    pub scaffold: &'static str,
    pub role: FileRole,
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Every planned file in write order
    pub files: Vec<EmittedFile>,
}

impl GenerateResult {
    pub fn created(&self) -> impl Iterator<Item = &EmittedFile> {
        self.with_result(WriteResult::Created)
    }

    pub fn overwritten(&self) -> impl Iterator<Item = &EmittedFile> {
        self.with_result(WriteResult::Overwritten)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &EmittedFile> {
        self.with_result(WriteResult::Skipped)
    }

    fn with_result(&self, result: WriteResult) -> impl Iterator<Item = &EmittedFile> {
        self.files.iter().filter(move |f| f.result == result)
    }
}

/// Files a scaffold would write already exist and may not be replaced.
#[derive(Debug, Error)]
#[error(
    "refusing to overwrite {} existing file(s) for {resource}:\n{}",
    .paths.len(),
    list_paths(.paths)
)]
pub struct CollisionError {
    pub resource: String,
    pub paths: Vec<PathBuf>,
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("  {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A scaffold's rendered files, ready to be written.
struct RenderedSet {
    scaffold: &'static str,
    files: Vec<(FileRole, File)>,
}

/// Renders and writes scaffolds for one resource layout.
pub struct Generator<'a> {
    renderer: &'a StubRenderer,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a StubRenderer, options: GenerateOptions) -> Self {
        Self { renderer, options }
    }

    /// Policy for files the user asked for directly.
    fn primary_policy(&self) -> Overwrite {
        if self.options.force {
            Overwrite::Always
        } else {
            Overwrite::Never
        }
    }

    /// Policy for files produced on behalf of another scaffold.
    fn sibling_policy(&self) -> Overwrite {
        if self.options.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        }
    }

    fn render(
        &self,
        scaffold: &dyn ResourceScaffold,
        layout: &ResourceLayout,
        policy: Overwrite,
    ) -> Result<RenderedSet> {
        let files = scaffold
            .plan(layout)
            .into_iter()
            .map(|planned| {
                let content = self
                    .renderer
                    .render(planned.stub, &planned.tokens)
                    .wrap_err_with(|| format!("failed to render {}", planned.role))?;
                Ok((
                    planned.role,
                    File::new(planned.path, content).with_overwrite(policy),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RenderedSet {
            scaffold: scaffold.name(),
            files,
        })
    }

    /// Render the API service and its siblings without touching disk.
    pub fn preview_api_service(&self, layout: &ResourceLayout) -> Result<Vec<PreviewFile>> {
        let requests = RequestScaffold::crud();
        self.preview(&ApiServiceScaffold, &[&TransformerScaffold, &requests], layout)
    }

    /// Render a scaffold (and siblings run on its behalf) without touching disk.
    pub fn preview(
        &self,
        primary: &dyn ResourceScaffold,
        siblings: &[&dyn ResourceScaffold],
        layout: &ResourceLayout,
    ) -> Result<Vec<PreviewFile>> {
        let mut sets = Vec::new();
        for sibling in siblings {
            sets.push(self.render(*sibling, layout, self.sibling_policy())?);
        }
        sets.push(self.render(primary, layout, self.primary_policy())?);

        Ok(sets
            .into_iter()
            .flat_map(|set| set.files)
            .map(|(role, file)| {
                let exists = file.exists();
                let (action, conflict) = match (file.overwrite(), exists) {
                    (_, false) => (WriteResult::Created, false),
                    (Overwrite::Always, true) => (WriteResult::Overwritten, false),
                    (Overwrite::IfMissing, true) => (WriteResult::Skipped, false),
                    (Overwrite::Never, true) => (WriteResult::Skipped, true),
                };
                PreviewFile {
                    role,
                    path: file.path().to_path_buf(),
                    content: file.content().to_string(),
                    action,
                    conflict,
                }
            })
            .collect())
    }

    /// Generate the API service, running the transformer and request
    /// scaffolds first.
    pub fn generate_api_service(&self, layout: &ResourceLayout) -> Result<GenerateResult> {
        let requests = RequestScaffold::crud();
        self.generate(&ApiServiceScaffold, &[&TransformerScaffold, &requests], layout)
    }

    /// Generate `primary` after running `siblings` against the same layout.
    ///
    /// Files of `primary` must not exist unless `force` is set, and every
    /// such collision is reported before anything is written. Sibling files
    /// that already exist are skipped. Writes are not transactional: if one
    /// fails, files written before it stay on disk.
    pub fn generate(
        &self,
        primary: &dyn ResourceScaffold,
        siblings: &[&dyn ResourceScaffold],
        layout: &ResourceLayout,
    ) -> Result<GenerateResult> {
        let main = self.render(primary, layout, self.primary_policy())?;

        let collisions = find_collisions(main.files.iter().map(|(_, file)| file));
        if !collisions.is_empty() {
            return Err(CollisionError {
                resource: layout.resource_class(),
                paths: collisions,
            }
            .into());
        }

        let mut sets = Vec::new();
        for sibling in siblings {
            sets.push(self.render(*sibling, layout, self.sibling_policy())?);
        }
        sets.push(main);

        let total: usize = sets.iter().map(|set| set.files.len()).sum();
        let mut result = GenerateResult::default();
        for set in sets {
            for (role, file) in set.files {
                let outcome = file.write().wrap_err_with(|| {
                    format!(
                        "stopped after writing {} of {} files; files already written were left in place",
                        result.files.len(),
                        total
                    )
                })?;
                debug!(
                    scaffold = set.scaffold,
                    path = %file.path().display(),
                    result = ?outcome,
                    "wrote file"
                );
                result.files.push(EmittedFile {
                    scaffold: set.scaffold,
                    role,
                    path: file.path().to_path_buf(),
                    result: outcome,
                });
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use apigen_core::Namespace;
    use apigen_manifest::ResourceLocation;
    use tempfile::TempDir;

    use super::*;
    use crate::naming::{ModelDescriptor, ResourceInput};

    fn layout(root: &Path, raw: &str) -> ResourceLayout {
        let location = ResourceLocation {
            namespace: Namespace::parse("App\\Filament\\Resources"),
            directory: "app/Filament/Resources".into(),
        };
        let model = ModelDescriptor::resolve(&ResourceInput::new(raw), &[], &location.namespace);
        ResourceLayout::new(&model, &location, root)
    }

    #[test]
    fn test_generate_writes_all_files() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let generator = Generator::new(&renderer, GenerateOptions::default());

        let result = generator
            .generate_api_service(&layout(temp.path(), "Blog"))
            .unwrap();

        assert_eq!(result.files.len(), 9);
        assert_eq!(result.created().count(), 9);
        assert!(
            temp.path()
                .join("app/Filament/Resources/Blogs/BlogResource/Api/BlogApiService.php")
                .exists()
        );
    }

    #[test]
    fn test_siblings_are_written_first() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let generator = Generator::new(&renderer, GenerateOptions::default());

        let result = generator
            .generate_api_service(&layout(temp.path(), "Blog"))
            .unwrap();

        let scaffolds: Vec<&str> = result.files.iter().map(|f| f.scaffold).collect();
        assert_eq!(scaffolds[0], "transformer");
        assert_eq!(&scaffolds[1..3], ["request", "request"]);
        assert!(scaffolds[3..].iter().all(|s| *s == "service"));
    }

    #[test]
    fn test_rerun_fails_without_force() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let layout = layout(temp.path(), "Blog");

        Generator::new(&renderer, GenerateOptions::default())
            .generate_api_service(&layout)
            .unwrap();
        let err = Generator::new(&renderer, GenerateOptions::default())
            .generate_api_service(&layout)
            .unwrap_err();

        let collision = err.downcast_ref::<CollisionError>().unwrap();
        assert_eq!(collision.paths.len(), 6);
        assert!(collision.paths.iter().any(|p| p.ends_with("Handlers/DetailHandler.php")));

        let message = err.to_string();
        assert!(message.contains("refusing to overwrite 6 existing file(s) for BlogResource"));
        assert!(message.contains("BlogApiService.php"));
        assert!(message.contains("DetailHandler.php"));
    }

    #[test]
    fn test_collision_check_happens_before_any_write() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let layout = layout(temp.path(), "Blog");

        let service = layout.service_path();
        std::fs::create_dir_all(service.parent().unwrap()).unwrap();
        std::fs::write(&service, "<?php // mine").unwrap();

        Generator::new(&renderer, GenerateOptions::default())
            .generate_api_service(&layout)
            .unwrap_err();

        assert!(!layout.transformer_path().exists());
        assert_eq!(std::fs::read_to_string(&service).unwrap(), "<?php // mine");
    }

    #[test]
    fn test_force_overwrites_everything() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let layout = layout(temp.path(), "Blog");

        Generator::new(&renderer, GenerateOptions::default())
            .generate_api_service(&layout)
            .unwrap();
        let result = Generator::new(&renderer, GenerateOptions { force: true })
            .generate_api_service(&layout)
            .unwrap();

        assert_eq!(result.overwritten().count(), 9);
    }

    #[test]
    fn test_existing_siblings_are_skipped() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let layout = layout(temp.path(), "Blog");
        let generator = Generator::new(&renderer, GenerateOptions::default());

        generator
            .generate(&TransformerScaffold, &[], &layout)
            .unwrap();
        let result = generator.generate_api_service(&layout).unwrap();

        let skipped: Vec<_> = result.skipped().map(|f| f.role.clone()).collect();
        assert_eq!(skipped, vec![FileRole::Transformer]);
    }

    #[test]
    fn test_preview_does_not_write() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let layout = layout(temp.path(), "Category");

        let preview = Generator::new(&renderer, GenerateOptions::default())
            .preview_api_service(&layout)
            .unwrap();

        assert_eq!(preview.len(), 9);
        assert!(preview.iter().all(|f| f.action == WriteResult::Created));
        assert!(!layout.base_dir().exists());
    }

    #[test]
    fn test_preview_flags_conflicts() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new();
        let layout = layout(temp.path(), "Blog");
        let generator = Generator::new(&renderer, GenerateOptions::default());

        generator.generate_api_service(&layout).unwrap();
        let preview = generator.preview_api_service(&layout).unwrap();

        let conflicts = preview.iter().filter(|f| f.conflict).count();
        assert_eq!(conflicts, 6);
    }
}
