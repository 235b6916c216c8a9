use tracing::debug;

use super::{ResourceScaffold, base_tokens};
use crate::{
    layout::ResourceLayout,
    plan::{EmissionPlan, FileRole},
    stubs::Stub,
};

/// The JSON transformer used by the detail and pagination handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformerScaffold;

impl ResourceScaffold for TransformerScaffold {
    fn name(&self) -> &'static str {
        "transformer"
    }

    fn plan(&self, layout: &ResourceLayout) -> EmissionPlan {
        let mut tokens = base_tokens(layout);
        tokens.insert("namespace", layout.transformers_namespace().to_string());
        tokens.insert("transformer", layout.transformer_class());

        debug!(transformer = %layout.transformer_fqcn(), "planned transformer");

        let mut plan = EmissionPlan::new();
        plan.push(
            FileRole::Transformer,
            Stub::Transformer,
            layout.transformer_path(),
            tokens,
        );
        plan
    }
}
