use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents an apigen.toml file with both raw content and parsed manifest.
pub struct ApigenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ApigenToml {
    /// Open and parse an apigen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Consume the file, keeping only the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

/// Content of a freshly initialised apigen.toml.
pub fn starter_manifest(panel: &str) -> String {
    format!(
        r#"[project]
default_namespace = 'App\Filament\Resources'
default_directory = "app/Filament/Resources"
route_prefix = "/api"
# stubs = "stubs/api-service"

[panels.{panel}]
default = true
resources = [
  {{ namespace = 'App\Filament\Resources', directory = "app/Filament/Resources" }},
]
"#
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apigen.toml");
        std::fs::write(&path, starter_manifest("admin")).unwrap();

        let file = ApigenToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert!(file.content().contains("[panels.admin]"));
        assert_eq!(file.manifest().default_panel_id(), Some("admin"));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ApigenToml::open(temp.path().join("nope.toml"))
            .err()
            .unwrap();

        assert!(matches!(*err, crate::Error::Io { .. }));
    }

    #[test]
    fn test_starter_manifest_is_valid() {
        let manifest = Manifest::from_str(&starter_manifest("backoffice")).unwrap();

        assert_eq!(manifest.default_panel_id(), Some("backoffice"));
        assert_eq!(
            manifest.locations("backoffice")[0].namespace.to_string(),
            "App\\Filament\\Resources"
        );
    }
}
