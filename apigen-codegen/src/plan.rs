//! Emission plans: the files a scaffold contributes for one resource.

use std::{fmt, path::PathBuf};

use indexmap::IndexMap;

use crate::{layout::HandlerKind, stubs::Stub};

/// Token values substituted into a stub, in insertion order.
pub type Tokens = IndexMap<&'static str, String>;

/// What a planned file is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRole {
    Service,
    Handler(HandlerKind),
    Transformer,
    Request(String),
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Service => write!(f, "service"),
            FileRole::Handler(kind) => write!(f, "{}-handler", kind.as_str()),
            FileRole::Transformer => write!(f, "transformer"),
            FileRole::Request(kind) => write!(f, "{}-request", kind.to_lowercase()),
        }
    }
}

/// A stub rendered with a token map into a destination path.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub role: FileRole,
    pub stub: Stub,
    pub path: PathBuf,
    pub tokens: Tokens,
}

/// Ordered list of planned files. Built fresh for every invocation.
#[derive(Debug, Clone, Default)]
pub struct EmissionPlan {
    files: Vec<PlannedFile>,
}

impl EmissionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file to the plan.
    pub fn push(&mut self, role: FileRole, stub: Stub, path: PathBuf, tokens: Tokens) {
        self.files.push(PlannedFile {
            role,
            stub,
            path,
            tokens,
        });
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl IntoIterator for EmissionPlan {
    type Item = PlannedFile;
    type IntoIter = std::vec::IntoIter<PlannedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
