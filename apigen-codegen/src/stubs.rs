//! Stub templates and rendering.
//!
//! Every stub ships embedded in the binary. A project can replace any of
//! them by dropping a file with the same name (e.g. `CreateHandler.stub`)
//! into its stub override directory.

use std::{
    borrow::Cow,
    fmt,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use handlebars::Handlebars;
use tracing::debug;

use crate::{layout::HandlerKind, plan::Tokens};

/// A named stub template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stub {
    ApiService,
    CreateHandler,
    UpdateHandler,
    DetailHandler,
    PaginationHandler,
    DeleteHandler,
    Transformer,
    Request,
}

impl Stub {
    pub const ALL: [Stub; 8] = [
        Stub::ApiService,
        Stub::CreateHandler,
        Stub::UpdateHandler,
        Stub::DetailHandler,
        Stub::PaginationHandler,
        Stub::DeleteHandler,
        Stub::Transformer,
        Stub::Request,
    ];

    /// Stub used for a handler.
    pub fn handler(kind: HandlerKind) -> Self {
        match kind {
            HandlerKind::Create => Stub::CreateHandler,
            HandlerKind::Update => Stub::UpdateHandler,
            HandlerKind::Detail => Stub::DetailHandler,
            HandlerKind::Pagination => Stub::PaginationHandler,
            HandlerKind::Delete => Stub::DeleteHandler,
        }
    }

    /// File name looked up in the override directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Stub::ApiService => "ResourceApiService.stub",
            Stub::CreateHandler => "CreateHandler.stub",
            Stub::UpdateHandler => "UpdateHandler.stub",
            Stub::DetailHandler => "DetailHandler.stub",
            Stub::PaginationHandler => "PaginationHandler.stub",
            Stub::DeleteHandler => "DeleteHandler.stub",
            Stub::Transformer => "Transformer.stub",
            Stub::Request => "Request.stub",
        }
    }

    /// Template compiled into the binary.
    pub fn embedded(self) -> &'static str {
        match self {
            Stub::ApiService => include_str!("../stubs/ResourceApiService.stub"),
            Stub::CreateHandler => include_str!("../stubs/CreateHandler.stub"),
            Stub::UpdateHandler => include_str!("../stubs/UpdateHandler.stub"),
            Stub::DetailHandler => include_str!("../stubs/DetailHandler.stub"),
            Stub::PaginationHandler => include_str!("../stubs/PaginationHandler.stub"),
            Stub::DeleteHandler => include_str!("../stubs/DeleteHandler.stub"),
            Stub::Transformer => include_str!("../stubs/Transformer.stub"),
            Stub::Request => include_str!("../stubs/Request.stub"),
        }
    }
}

impl fmt::Display for Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Renders stubs with handlebars.
///
/// Escaping is disabled since the output is PHP source, and strict mode is
/// on so a token missing from the map is an error rather than a blank.
pub struct StubRenderer {
    handlebars: Handlebars<'static>,
    overrides: Option<PathBuf>,
}

impl Default for StubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StubRenderer {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self {
            handlebars,
            overrides: None,
        }
    }

    /// Look up stubs in `dir` before falling back to the embedded ones.
    pub fn with_overrides(mut self, dir: impl Into<PathBuf>) -> Self {
        self.overrides = Some(dir.into());
        self
    }

    pub fn overrides(&self) -> Option<&Path> {
        self.overrides.as_deref()
    }

    /// Template source for a stub, preferring an override file.
    pub fn template(&self, stub: Stub) -> Result<Cow<'static, str>> {
        if let Some(dir) = &self.overrides {
            let path = dir.join(stub.file_name());
            if path.is_file() {
                debug!(stub = %stub, path = %path.display(), "using stub override");
                let content = std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read stub '{}'", path.display()))?;
                return Ok(Cow::Owned(content));
            }
        }
        Ok(Cow::Borrowed(stub.embedded()))
    }

    /// Render a stub with the given tokens.
    pub fn render(&self, stub: Stub, tokens: &Tokens) -> Result<String> {
        let template = self.template(stub)?;
        self.handlebars
            .render_template(&template, tokens)
            .wrap_err_with(|| format!("failed to render stub '{}'", stub))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn tokens(pairs: &[(&'static str, &str)]) -> Tokens {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_every_stub_is_embedded() {
        for stub in Stub::ALL {
            assert!(
                stub.embedded().starts_with("<?php"),
                "{} is not a PHP stub",
                stub
            );
        }
    }

    #[test]
    fn test_render_does_not_escape() {
        let rendered = StubRenderer::new()
            .render(
                Stub::Request,
                &tokens(&[
                    ("namespace", "App\\Filament\\Resources\\Blogs\\BlogResource\\Api\\Requests"),
                    ("requestClass", "CreateBlogRequest"),
                ]),
            )
            .unwrap();

        assert!(rendered.contains("namespace App\\Filament\\Resources\\Blogs\\BlogResource\\Api\\Requests;"));
        assert!(rendered.contains("class CreateBlogRequest extends FormRequest"));
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let err = StubRenderer::new()
            .render(Stub::Request, &tokens(&[("namespace", "App")]))
            .unwrap_err();

        assert!(err.to_string().contains("Request.stub"));
    }

    #[test]
    fn test_override_takes_precedence() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("Request.stub"),
            "<?php // custom {{ requestClass }}\n",
        )
        .unwrap();

        let renderer = StubRenderer::new().with_overrides(temp.path());
        let rendered = renderer
            .render(Stub::Request, &tokens(&[("requestClass", "CreateBlogRequest")]))
            .unwrap();

        assert_eq!(rendered, "<?php // custom CreateBlogRequest\n");
        assert_eq!(renderer.overrides(), Some(temp.path()));
    }

    #[test]
    fn test_missing_override_falls_back_to_embedded() {
        let temp = TempDir::new().unwrap();
        let renderer = StubRenderer::new().with_overrides(temp.path());

        assert_eq!(
            renderer.template(Stub::Transformer).unwrap(),
            Stub::Transformer.embedded()
        );
    }
}
