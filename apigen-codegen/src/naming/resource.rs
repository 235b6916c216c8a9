//! Resolution of a raw resource identifier into a model name.

use apigen_core::Namespace;
use tracing::debug;

use super::pluralize_studly;

/// Suffix removed from the class segment of the input.
const RESOURCE_SUFFIX: &str = "Resource";

/// A resource identifier as typed by the user, plus its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInput {
    raw: String,
    normalized: Namespace,
}

impl ResourceInput {
    /// Normalize raw input: `/` becomes `\`, outer separators and
    /// whitespace are trimmed and empty segments collapse.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = Namespace::parse(&raw);
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &Namespace {
        &self.normalized
    }

    /// Whether nothing but separators and whitespace was typed.
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Result of name resolution for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Known namespace the input was fully qualified with, if any
    anchor: Option<Namespace>,
    /// Namespace of the model relative to its resource location
    model_namespace: Namespace,
    /// Class name without the `Resource` suffix
    model_class: String,
    /// Plural form of the class name
    plural_model_class: String,
}

impl ModelDescriptor {
    /// Resolve an input against the known namespace prefixes.
    ///
    /// Input that starts with one of `known` (exact, segment-wise) is taken
    /// as fully qualified and anchored to that prefix. Anything else is
    /// relative to the first known prefix, or to `default_namespace` when
    /// none are known. After the anchor is removed a leading
    /// `default_namespace` is stripped again, ignoring case, so
    /// `app/filament/resources/Blog` still resolves to `Blog`.
    ///
    /// Resolution never fails. A class segment that is empty once the
    /// trailing `Resource` is removed becomes `Resource`.
    pub fn resolve(
        input: &ResourceInput,
        known: &[Namespace],
        default_namespace: &Namespace,
    ) -> Self {
        let normalized = input.normalized();

        let anchor = known
            .iter()
            .find(|ns| !ns.is_empty() && normalized.starts_with(ns))
            .cloned();
        let base = anchor
            .clone()
            .or_else(|| known.first().cloned())
            .unwrap_or_else(|| default_namespace.clone());

        let relative = match &anchor {
            Some(prefix) => normalized.strip_prefix(prefix).unwrap_or_default(),
            None => normalized.clone(),
        };
        let relative = relative
            .strip_prefix_ignore_case(default_namespace)
            .unwrap_or(relative);

        let class_segment = relative.last().unwrap_or_default();
        let stripped = class_segment
            .strip_suffix(RESOURCE_SUFFIX)
            .unwrap_or(class_segment);
        let model_class = if stripped.is_empty() {
            RESOURCE_SUFFIX.to_string()
        } else {
            stripped.to_string()
        };
        let plural_model_class = pluralize_studly(&model_class);

        let descriptor = Self {
            anchor,
            model_namespace: relative.parent(),
            model_class,
            plural_model_class,
        };
        debug!(
            input = input.raw(),
            base = %base,
            model = %descriptor.model(),
            plural = descriptor.plural_model_class(),
            "resolved resource"
        );
        descriptor
    }

    pub fn anchor(&self) -> Option<&Namespace> {
        self.anchor.as_ref()
    }

    pub fn model_namespace(&self) -> &Namespace {
        &self.model_namespace
    }

    pub fn model_class(&self) -> &str {
        &self.model_class
    }

    pub fn plural_model_class(&self) -> &str {
        &self.plural_model_class
    }

    /// Model path relative to its location, e.g. `Shop\Product`.
    pub fn model(&self) -> Namespace {
        self.model_namespace.child(&self.model_class)
    }

    /// Resource class name, e.g. `ProductResource`.
    pub fn resource_class(&self) -> String {
        format!("{}{}", self.model_class, RESOURCE_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_ns() -> Namespace {
        Namespace::parse("App\\Filament\\Resources")
    }

    fn resolve(raw: &str, known: &[&str]) -> ModelDescriptor {
        let known: Vec<Namespace> = known.iter().map(|ns| Namespace::parse(ns)).collect();
        ModelDescriptor::resolve(&ResourceInput::new(raw), &known, &default_ns())
    }

    #[test]
    fn test_input_is_normalized() {
        let input = ResourceInput::new(" /Shop/Product/ ");
        assert_eq!(input.normalized().to_string(), "Shop\\Product");
        assert_eq!(input.raw(), " /Shop/Product/ ");
        assert!(!input.is_blank());
        assert!(ResourceInput::new(" // ").is_blank());
    }

    #[test]
    fn test_simple_model() {
        let model = resolve("Blog", &["App\\Filament\\Resources"]);

        assert_eq!(model.model_class(), "Blog");
        assert_eq!(model.plural_model_class(), "Blogs");
        assert_eq!(model.resource_class(), "BlogResource");
        assert!(model.model_namespace().is_empty());
        assert!(model.anchor().is_none());
    }

    #[test]
    fn test_resource_suffix_is_stripped_once() {
        assert_eq!(resolve("BlogResource", &[]).model_class(), "Blog");
        assert_eq!(resolve("ResourceResource", &[]).model_class(), "Resource");
        assert_eq!(resolve("BlogResources", &[]).model_class(), "BlogResources");
    }

    #[test]
    fn test_bare_resource_falls_back_to_resource() {
        let model = resolve("Resource", &[]);

        assert_eq!(model.model_class(), "Resource");
        assert_eq!(model.resource_class(), "ResourceResource");
        assert_eq!(model.plural_model_class(), "Resources");
    }

    #[test]
    fn test_nested_model_namespace() {
        let model = resolve("Shop/Product", &["App\\Filament\\Resources"]);

        assert_eq!(model.model_namespace().to_string(), "Shop");
        assert_eq!(model.model_class(), "Product");
        assert_eq!(model.plural_model_class(), "Products");
        assert_eq!(model.model().to_string(), "Shop\\Product");
    }

    #[test]
    fn test_fully_qualified_input_is_anchored() {
        let model = resolve(
            "App\\Filament\\Shared\\Resources\\Shop\\ProductResource",
            &["App\\Filament\\Resources", "App\\Filament\\Shared\\Resources"],
        );

        assert_eq!(
            model.anchor().map(ToString::to_string).as_deref(),
            Some("App\\Filament\\Shared\\Resources")
        );
        assert_eq!(model.model().to_string(), "Shop\\Product");
    }

    #[test]
    fn test_anchor_match_is_case_sensitive() {
        let model = resolve("app\\filament\\resources\\Blog", &["App\\Filament\\Resources"]);

        assert!(model.anchor().is_none());
        assert_eq!(model.model().to_string(), "Blog");
    }

    #[test]
    fn test_duplicated_default_namespace_is_stripped() {
        let model = resolve(
            "App/Filament/Resources/Category",
            &["App\\Filament\\Admin\\Resources"],
        );

        assert!(model.anchor().is_none());
        assert_eq!(model.model().to_string(), "Category");
        assert_eq!(model.plural_model_class(), "Categories");
    }

    #[test]
    fn test_no_known_namespaces_uses_default() {
        let model = resolve("App\\Filament\\Resources\\Blog", &[]);

        assert!(model.anchor().is_none());
        assert_eq!(model.model().to_string(), "Blog");
    }

    #[test]
    fn test_namespace_only_input_falls_back_to_resource() {
        let model = resolve("App\\Filament\\Resources", &["App\\Filament\\Resources"]);

        assert_eq!(model.model_class(), "Resource");
        assert!(model.model_namespace().is_empty());
    }
}
