//! The target project: its root directory and manifest.

use std::path::{Path, PathBuf};

use apigen_codegen::StubRenderer;
use apigen_manifest::{ApigenToml, MANIFEST_FILE, Manifest};
use eyre::{Context, Result};
use tracing::debug;

use crate::commands::UnwrapOrExit;

/// A loaded project.
#[derive(Debug)]
pub struct Project {
    /// Directory relative manifest paths are resolved against
    pub root: PathBuf,
    /// The manifest file, if one was found
    pub config_path: Option<PathBuf>,
    pub manifest: Manifest,
}

impl Project {
    /// Load the project for `config`.
    ///
    /// Without an explicit path `./apigen.toml` is used when present and the
    /// built-in manifest otherwise. An explicit path must exist.
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().wrap_err("failed to get current directory")?;
        Self::load_from(&cwd, config)
    }

    fn load_from(cwd: &Path, config: Option<&Path>) -> Result<Self> {
        let path = match config {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = cwd.join(MANIFEST_FILE);
                default.is_file().then_some(default)
            }
        };

        let Some(path) = path else {
            debug!("no {} found, using built-in defaults", MANIFEST_FILE);
            return Ok(Self {
                root: cwd.to_path_buf(),
                config_path: None,
                manifest: Manifest::default(),
            });
        };

        let manifest = ApigenToml::open(&path).unwrap_or_exit().into_manifest();
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
            _ => cwd.to_path_buf(),
        };
        debug!(config = %path.display(), root = %root.display(), "loaded manifest");

        Ok(Self {
            root,
            config_path: Some(path),
            manifest,
        })
    }

    /// Stub renderer honouring the project's override directory.
    pub fn renderer(&self) -> StubRenderer {
        match &self.manifest.project.stubs {
            Some(dir) => StubRenderer::new().with_overrides(self.root.join(dir)),
            None => StubRenderer::new(),
        }
    }

    /// Path relative to the project root, for display.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
