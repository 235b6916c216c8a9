use tracing::debug;

use super::{ResourceScaffold, base_tokens};
use crate::{
    layout::{HandlerKind, ResourceLayout},
    plan::{EmissionPlan, FileRole},
    stubs::Stub,
};

/// The API service class and its five CRUD handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiServiceScaffold;

impl ResourceScaffold for ApiServiceScaffold {
    fn name(&self) -> &'static str {
        "service"
    }

    fn plan(&self, layout: &ResourceLayout) -> EmissionPlan {
        let mut plan = EmissionPlan::new();

        let mut tokens = base_tokens(layout);
        tokens.insert("namespace", layout.api_namespace().to_string());
        tokens.insert("apiServiceClass", layout.service_class());
        tokens.insert("handlersNamespace", layout.handlers_namespace().to_string());
        plan.push(
            FileRole::Service,
            Stub::ApiService,
            layout.service_path(),
            tokens,
        );

        for kind in HandlerKind::ALL {
            let mut tokens = base_tokens(layout);
            tokens.insert("handlersNamespace", layout.handlers_namespace().to_string());
            if let Some(request) = kind.request_kind() {
                tokens.insert("request", layout.request_fqcn(request).to_string());
                tokens.insert("requestClass", layout.request_class(request));
            }
            if kind.uses_transformer() {
                tokens.insert("transformer", layout.transformer_class());
                tokens.insert("transformerClass", layout.transformer_fqcn().to_string());
            }
            plan.push(
                FileRole::Handler(kind),
                Stub::handler(kind),
                layout.handler_path(kind),
                tokens,
            );
        }

        debug!(
            service = %layout.service_class(),
            files = plan.len(),
            "planned api service"
        );
        plan
    }
}
