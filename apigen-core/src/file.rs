use std::path::{Path, PathBuf};

use eyre::{Context, Result, bail};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// File existed and was replaced
    Overwritten,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace whatever is on disk
    Always,
    /// Only create if file doesn't exist (idempotent collaborators)
    IfMissing,
    /// Refuse to touch an existing file
    #[default]
    Never,
}

/// A file to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (default: never overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    /// Set the overwrite policy
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the overwrite policy
    pub fn overwrite(&self) -> Overwrite {
        self.overwrite
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its overwrite policy
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.exists();
        match (self.overwrite, existed) {
            (Overwrite::Never, true) => {
                bail!("'{}' already exists", self.path.display())
            }
            (Overwrite::IfMissing, true) => Ok(WriteResult::Skipped),
            (Overwrite::Always, true) => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Overwritten)
            }
            (_, false) => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Created)
            }
        }
    }
}

/// Paths of files that exist on disk and whose policy forbids overwriting.
pub fn find_collisions<'a>(files: impl IntoIterator<Item = &'a File>) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|f| f.overwrite == Overwrite::Never && f.exists())
        .map(|f| f.path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.php");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.php");

        let result = File::new(&path, "<?php").write().unwrap();

        assert_eq!(result, WriteResult::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php");
    }

    #[test]
    fn test_file_write_never_fails_on_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.php");
        fs::write(&path, "original").unwrap();

        let err = File::new(&path, "replacement").write().unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.php");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated")
            .with_overwrite(Overwrite::Always)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.php");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "should not write")
            .with_overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_find_collisions_ignores_permissive_policies() {
        let temp = TempDir::new().unwrap();
        let taken = temp.path().join("taken.php");
        fs::write(&taken, "x").unwrap();

        let files = [
            File::new(&taken, "a"),
            File::new(&taken, "b").with_overwrite(Overwrite::Always),
            File::new(&taken, "c").with_overwrite(Overwrite::IfMissing),
            File::new(temp.path().join("free.php"), "d"),
        ];

        assert_eq!(find_collisions(&files), vec![taken]);
    }
}
