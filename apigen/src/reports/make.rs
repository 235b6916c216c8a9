//! Make command report data structures.

use apigen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from a make command.
#[derive(Debug)]
pub struct MakeReport {
    /// What was generated ("API", "transformer", a request class).
    pub what: String,
    /// Resource class the files belong to.
    pub resource_class: String,
    /// Route group the service registers under, for API services.
    pub route_prefix: Option<String>,
    /// Files written, or the preview.
    pub result: MakeResult,
}

/// Result of a make command.
#[derive(Debug)]
pub enum MakeResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewEntry>),
}

/// A file written to disk.
#[derive(Debug)]
pub struct WrittenFile {
    /// Path relative to the project root.
    pub path: String,
    pub result: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewEntry {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
    pub action: WriteResult,
    /// The file exists and would block generation.
    pub conflict: bool,
}

impl Report for MakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            MakeResult::Written(files) => self.render_written(out, files),
            MakeResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl MakeReport {
    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        out.success(&format!(
            "Successfully created {} for {}!",
            self.what, self.resource_class
        ));
        if let Some(prefix) = &self.route_prefix {
            out.preformatted(&format!(
                "It automatically registered to '{}' route group",
                prefix
            ));
        }

        let with = |result: WriteResult| files.iter().filter(move |f| f.result == result);

        if with(WriteResult::Created).next().is_some() {
            out.newline();
            out.section("Created");
            for file in with(WriteResult::Created) {
                out.added_item(&file.path);
            }
        }

        if with(WriteResult::Overwritten).next().is_some() {
            out.newline();
            out.section("Overwritten");
            for file in with(WriteResult::Overwritten) {
                out.changed_item(&file.path);
            }
        }

        if with(WriteResult::Skipped).next().is_some() {
            out.newline();
            out.section("Skipped (already exist)");
            for file in with(WriteResult::Skipped) {
                out.list_item(&file.path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewEntry]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        let count = |action: WriteResult| {
            files
                .iter()
                .filter(|f| f.action == action && !f.conflict)
                .count()
        };
        out.preformatted(&format!(
            "{} files would be created, {} overwritten, {} skipped",
            count(WriteResult::Created),
            count(WriteResult::Overwritten),
            count(WriteResult::Skipped)
        ));

        for file in files.iter().filter(|f| f.conflict) {
            out.warning(&format!(
                "'{}' already exists; re-run with --force to overwrite it",
                file.path
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn written(files: Vec<(&str, WriteResult)>, route_prefix: Option<&str>) -> MakeReport {
        MakeReport {
            what: "API".to_string(),
            resource_class: "BlogResource".to_string(),
            route_prefix: route_prefix.map(String::from),
            result: MakeResult::Written(
                files
                    .into_iter()
                    .map(|(path, result)| WrittenFile {
                        path: path.to_string(),
                        result,
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_success_messages() {
        let mut out = BufferOutput::default();
        written(vec![("a.php", WriteResult::Created)], Some("/api")).render(&mut out);

        assert_eq!(out.lines[0], "✓ Successfully created API for BlogResource!");
        assert_eq!(
            out.lines[1],
            "It automatically registered to '/api' route group"
        );
        assert!(out.text().contains("Created:\n  + a.php"));
    }

    #[test]
    fn test_skipped_files_are_listed() {
        let mut out = BufferOutput::default();
        written(
            vec![
                ("t.php", WriteResult::Skipped),
                ("s.php", WriteResult::Overwritten),
            ],
            None,
        )
        .render(&mut out);

        let text = out.text();
        assert!(!text.contains("route group"));
        assert!(!text.contains("Created:"));
        assert!(text.contains("Overwritten:\n  ~ s.php"));
        assert!(text.contains("Skipped (already exist):\n  - t.php"));
    }

    #[test]
    fn test_preview_summary_and_conflicts() {
        let report = MakeReport {
            what: "transformer".to_string(),
            resource_class: "BlogResource".to_string(),
            route_prefix: None,
            result: MakeResult::Preview(vec![
                PreviewEntry {
                    path: "new.php".to_string(),
                    content: "<?php".to_string(),
                    action: WriteResult::Created,
                    conflict: false,
                },
                PreviewEntry {
                    path: "old.php".to_string(),
                    content: "<?php".to_string(),
                    action: WriteResult::Skipped,
                    conflict: true,
                },
            ]),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── new.php ──");
        assert!(
            out.lines
                .contains(&"1 files would be created, 0 overwritten, 0 skipped".to_string())
        );
        assert!(
            out.lines
                .contains(&"warning: 'old.php' already exists; re-run with --force to overwrite it".to_string())
        );
    }
}
