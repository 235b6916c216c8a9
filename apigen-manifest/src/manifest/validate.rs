//! Validation context and utilities for manifest parsing.

use std::{collections::HashSet, sync::Arc};

use apigen_core::Namespace;
use miette::SourceSpan;

use super::Manifest;
use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy so nested checks can name where they are.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "apigen.toml");
/// ctx.validate_panel_id("admin")?;
///
/// let nested = ctx.push("panels").push("admin");
/// nested.validate_namespace(&ns)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["panels", "admin"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "namespace in 'panels.admin'" or just "namespace" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate a whole manifest.
    pub fn validate_manifest(&self, manifest: &Manifest) -> Result<()> {
        let project = self.push("project");
        project.validate_namespace(&manifest.project.default_namespace)?;
        project.validate_route_prefix(&manifest.project.route_prefix)?;

        if manifest.panels.is_empty() {
            return Err(Box::new(Error::NoPanels {
                src: self.source.named_source(),
            }));
        }

        let mut first_default: Option<&str> = None;
        for (id, panel) in &manifest.panels {
            self.validate_panel_id(id)?;

            if panel.default {
                if let Some(first) = first_default {
                    return Err(Box::new(Error::DuplicateDefaultPanel {
                        src: self.source.named_source(),
                        first_span: find_table_span(self.src(), first),
                        second_span: find_table_span(self.src(), id),
                        first: first.to_string(),
                        second: id.clone(),
                    }));
                }
                first_default = Some(id);
            }

            let panel_ctx = self.push("panels").push(id);
            let mut seen = HashSet::new();
            for location in &panel.resources {
                panel_ctx.validate_namespace(&location.namespace)?;
                if !seen.insert(&location.namespace) {
                    return Err(self.source.validation_error(
                        format!(
                            "namespace '{}' is listed twice in {}",
                            location.namespace,
                            panel_ctx.context_for("panel")
                        ),
                        find_namespace_span(self.src(), &location.namespace),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Validate that a namespace is non-empty and made of PHP identifiers.
    pub fn validate_namespace(&self, namespace: &Namespace) -> Result<()> {
        let span = find_namespace_span(self.src(), namespace);

        if namespace.is_empty() {
            return Err(self.source.invalid_namespace_error(
                "",
                format!("{} cannot be empty", self.context_for("namespace")),
                span,
            ));
        }

        if let Some(segment) = namespace.invalid_segment() {
            return Err(self.source.invalid_namespace_error(
                namespace.to_string(),
                format!(
                    "segment '{}' of {} is not a valid identifier",
                    segment,
                    self.context_for("namespace")
                ),
                span,
            ));
        }

        Ok(())
    }

    /// Validate a panel id.
    pub fn validate_panel_id(&self, id: &str) -> Result<()> {
        if let Some(reason) = validate_panel_id(id) {
            return Err(self
                .source
                .invalid_panel_id_error(id, reason, find_table_span(self.src(), id)));
        }
        Ok(())
    }

    fn validate_route_prefix(&self, prefix: &str) -> Result<()> {
        if !prefix.starts_with('/') {
            return Err(self.source.validation_error(
                format!("route prefix '{}' must start with '/'", prefix),
                find_string_span(self.src(), prefix),
            ));
        }
        Ok(())
    }
}

/// Find the span of a panel id in a `[panels.<id>]` header.
pub(crate) fn find_table_span(src: &str, id: &str) -> Option<SourceSpan> {
    let patterns = [format!("panels.{}]", id), format!("panels.{}.", id)];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // skip "panels."
            let start = pos + 7;
            return Some(SourceSpan::from((start, id.len())));
        }
    }

    None
}

/// Find the span of a namespace value, written either as a literal string
/// (`'App\Models'`) or as a basic string with escaped backslashes.
pub(crate) fn find_namespace_span(src: &str, namespace: &Namespace) -> Option<SourceSpan> {
    let literal = namespace.to_string();
    let escaped = literal.replace('\\', "\\\\");

    let candidates = [format!("'{}'", literal), format!("\"{}\"", escaped)];
    for candidate in &candidates {
        if let Some(pos) = src.find(candidate.as_str()) {
            // skip the opening quote
            return Some(SourceSpan::from((pos + 1, candidate.len() - 2)));
        }
    }

    None
}

fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .find_map(|candidate| src.find(candidate.as_str()))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Validate a panel id.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_panel_id(id: &str) -> Option<&'static str> {
    let mut chars = id.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        Some(_) => return Some("panel id must start with a letter or number"),
        None => return Some("panel id cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Some("panel id must contain only letters, numbers, dashes, and underscores");
    }

    None
}
