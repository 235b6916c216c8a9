//! Class names, namespaces and destination paths derived for a model.

use std::path::{Component, Path, PathBuf};

use apigen_core::{Namespace, to_studly_case};
use apigen_manifest::ResourceLocation;

use crate::naming::ModelDescriptor;

/// One of the five CRUD request handlers of an API service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Create,
    Update,
    Detail,
    Pagination,
    Delete,
}

impl HandlerKind {
    /// All handlers in the order they are registered by the service.
    pub const ALL: [HandlerKind; 5] = [
        HandlerKind::Create,
        HandlerKind::Update,
        HandlerKind::Delete,
        HandlerKind::Pagination,
        HandlerKind::Detail,
    ];

    /// Lowercase name, e.g. `create`.
    pub fn as_str(self) -> &'static str {
        match self {
            HandlerKind::Create => "create",
            HandlerKind::Update => "update",
            HandlerKind::Detail => "detail",
            HandlerKind::Pagination => "pagination",
            HandlerKind::Delete => "delete",
        }
    }

    /// Fixed handler class name.
    pub fn class_name(self) -> &'static str {
        match self {
            HandlerKind::Create => "CreateHandler",
            HandlerKind::Update => "UpdateHandler",
            HandlerKind::Detail => "DetailHandler",
            HandlerKind::Pagination => "PaginationHandler",
            HandlerKind::Delete => "DeleteHandler",
        }
    }

    /// Request object kind the handler type-hints, if any.
    pub fn request_kind(self) -> Option<&'static str> {
        match self {
            HandlerKind::Create => Some("Create"),
            HandlerKind::Update => Some("Update"),
            _ => None,
        }
    }

    /// Whether the handler returns transformer output.
    pub fn uses_transformer(self) -> bool {
        matches!(self, HandlerKind::Detail | HandlerKind::Pagination)
    }
}

/// Every derived name and path for one model inside one resource location.
///
/// For model `Blog` in `App\Filament\Resources` / `app/Filament/Resources`:
///
/// ```text
/// App\Filament\Resources\Blogs\BlogResource\Api\BlogApiService
///   -> app/Filament/Resources/Blogs/BlogResource/Api/BlogApiService.php
/// ```
#[derive(Debug, Clone)]
pub struct ResourceLayout {
    model: ModelDescriptor,
    /// Location namespace joined with the model namespace
    namespace: Namespace,
    /// Directory holding everything generated for the resource
    base_dir: PathBuf,
}

impl ResourceLayout {
    /// Derive the layout of `model` inside `location`.
    ///
    /// A relative location directory is taken relative to `root`.
    pub fn new(model: &ModelDescriptor, location: &ResourceLocation, root: &Path) -> Self {
        let namespace = location.namespace.join(model.model_namespace());
        let base_dir = root
            .join(normalize_dir(&location.directory))
            .join(model.model_namespace().to_path())
            .join(model.plural_model_class())
            .join(model.resource_class());

        Self {
            model: model.clone(),
            namespace,
            base_dir,
        }
    }

    pub fn model(&self) -> &ModelDescriptor {
        &self.model
    }

    pub fn model_class(&self) -> &str {
        self.model.model_class()
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resource_class(&self) -> String {
        self.model.resource_class()
    }

    /// Fully qualified resource class, e.g. `App\...\Blogs\BlogResource`.
    pub fn resource_namespace(&self) -> Namespace {
        self.namespace
            .child(self.model.plural_model_class())
            .child(self.resource_class())
    }

    /// Namespace of the service class.
    pub fn api_namespace(&self) -> Namespace {
        self.resource_namespace().child("Api")
    }

    pub fn handlers_namespace(&self) -> Namespace {
        self.api_namespace().child("Handlers")
    }

    pub fn transformers_namespace(&self) -> Namespace {
        self.api_namespace().child("Transformers")
    }

    pub fn requests_namespace(&self) -> Namespace {
        self.api_namespace().child("Requests")
    }

    pub fn service_class(&self) -> String {
        format!("{}ApiService", self.model_class())
    }

    pub fn service_path(&self) -> PathBuf {
        self.api_dir().join(php_file(&self.service_class()))
    }

    pub fn handler_path(&self, kind: HandlerKind) -> PathBuf {
        self.api_dir()
            .join("Handlers")
            .join(php_file(kind.class_name()))
    }

    pub fn transformer_class(&self) -> String {
        format!("{}Transformer", self.model_class())
    }

    pub fn transformer_fqcn(&self) -> Namespace {
        self.transformers_namespace()
            .child(self.transformer_class())
    }

    pub fn transformer_path(&self) -> PathBuf {
        self.api_dir()
            .join("Transformers")
            .join(php_file(&self.transformer_class()))
    }

    /// Request class for a kind such as `Create` or `bulk-update`.
    pub fn request_class(&self, kind: &str) -> String {
        format!("{}{}Request", to_studly_case(kind), self.model_class())
    }

    pub fn request_fqcn(&self, kind: &str) -> Namespace {
        self.requests_namespace().child(self.request_class(kind))
    }

    pub fn request_path(&self, kind: &str) -> PathBuf {
        self.api_dir()
            .join("Requests")
            .join(php_file(&self.request_class(kind)))
    }

    fn api_dir(&self) -> PathBuf {
        self.base_dir.join("Api")
    }
}

fn php_file(class: &str) -> String {
    format!("{}.php", class)
}

/// Treat `\` as a separator and drop empty and `.` components.
fn normalize_dir(dir: &Path) -> PathBuf {
    let unified = dir.to_string_lossy().replace('\\', "/");
    Path::new(&unified)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
