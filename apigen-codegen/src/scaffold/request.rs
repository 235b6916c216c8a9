use apigen_core::to_studly_case;
use tracing::debug;

use super::{ResourceScaffold, base_tokens};
use crate::{
    layout::ResourceLayout,
    plan::{EmissionPlan, FileRole},
    stubs::Stub,
};

/// Form request objects, one per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestScaffold {
    kinds: Vec<String>,
}

impl RequestScaffold {
    /// Requests for the given kinds, normalized to StudlyCase.
    pub fn new<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            kinds: kinds
                .into_iter()
                .map(|k| to_studly_case(k.as_ref().trim()))
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// The `Create` and `Update` requests used by the service handlers.
    pub fn crud() -> Self {
        Self::new(["Create", "Update"])
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }
}

impl ResourceScaffold for RequestScaffold {
    fn name(&self) -> &'static str {
        "request"
    }

    fn plan(&self, layout: &ResourceLayout) -> EmissionPlan {
        let mut plan = EmissionPlan::new();
        for kind in &self.kinds {
            let mut tokens = base_tokens(layout);
            tokens.insert("namespace", layout.requests_namespace().to_string());
            tokens.insert("requestClass", layout.request_class(kind));

            debug!(request = %layout.request_fqcn(kind), "planned request");
            plan.push(
                FileRole::Request(kind.clone()),
                Stub::Request,
                layout.request_path(kind),
                tokens,
            );
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_studly() {
        let scaffold = RequestScaffold::new(["create", "bulk-update", " ", "Archive"]);
        assert_eq!(scaffold.kinds(), ["Create", "BulkUpdate", "Archive"]);
    }

    #[test]
    fn test_crud_kinds() {
        assert_eq!(RequestScaffold::crud().kinds(), ["Create", "Update"]);
    }
}
