//! Scaffolds: generators that plan files for a resolved resource.
//!
//! The API service scaffold owns the service class and its handlers. The
//! transformer and request scaffolds are its siblings: they run first
//! against the same [`ResourceLayout`] and may also be used on their own.

mod request;
mod service;
mod transformer;

pub use request::RequestScaffold;
pub use service::ApiServiceScaffold;
pub use transformer::TransformerScaffold;

use crate::{
    layout::ResourceLayout,
    plan::{EmissionPlan, Tokens},
};

/// A generator contributing files for one resource.
pub trait ResourceScaffold {
    /// Short name used in logs and reports (e.g., "service", "transformer")
    fn name(&self) -> &'static str;

    /// Plan the files this scaffold writes for the resource
    fn plan(&self, layout: &ResourceLayout) -> EmissionPlan;
}

/// Tokens every stub can rely on.
pub(crate) fn base_tokens(layout: &ResourceLayout) -> Tokens {
    let mut tokens = Tokens::new();
    tokens.insert("resource", layout.resource_namespace().to_string());
    tokens.insert("resourceClass", layout.resource_class());
    tokens.insert("model", layout.model_class().to_string());
    tokens
}
