use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid namespace error.
    pub fn invalid_namespace_error(
        &self,
        namespace: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidNamespace {
            src: self.named_source(),
            span,
            namespace: namespace.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid panel id error.
    pub fn invalid_panel_id_error(
        &self,
        id: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPanelId {
            src: self.named_source(),
            span,
            id: id.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'apigen init' to create a starter apigen.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse apigen.toml")]
    #[diagnostic(code(apigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("no panels are defined")]
    #[diagnostic(
        code(apigen::no_panels),
        help("add a panel, e.g.\n\n[panels.admin]\nresources = [{{ namespace = \"App\\\\Filament\\\\Resources\", directory = \"app/Filament/Resources\" }}]")
    )]
    NoPanels {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("more than one panel is marked as default")]
    #[diagnostic(
        code(apigen::duplicate_default),
        help("keep `default = true` on '{first}' or '{second}', not both")
    )]
    DuplicateDefaultPanel {
        #[source_code]
        src: NamedSource<String>,
        #[label("first default panel")]
        first_span: Option<SourceSpan>,
        #[label("conflicts with first default")]
        second_span: Option<SourceSpan>,
        first: String,
        second: String,
    },

    #[error("invalid namespace '{namespace}'")]
    #[diagnostic(
        code(apigen::invalid_namespace),
        help(
            "{reason}. Namespace segments must start with a letter or underscore and contain only letters, numbers, and underscores."
        )
    )]
    InvalidNamespace {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid namespace")]
        span: Option<SourceSpan>,
        namespace: String,
        reason: String,
    },

    #[error("invalid panel id '{id}'")]
    #[diagnostic(
        code(apigen::invalid_panel_id),
        help("{reason}. Use only letters, numbers, dashes, and underscores.")
    )]
    InvalidPanelId {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid panel id")]
        span: Option<SourceSpan>,
        id: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(apigen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
