//! Name resolution, layout derivation and stub rendering for apigen.
//!
//! # Module Organization
//!
//! - [`naming`] - Resource input normalization, model resolution, pluralization
//! - [`layout`] - Class names, namespaces and destination paths for a model
//! - [`plan`] - Emission plans: which stub goes where with which tokens
//! - [`stubs`] - Embedded stub templates and the renderer
//! - [`scaffold`] - The API service generator and its sibling generators
//! - [`generator`] - Runs scaffolds: collision checks, rendering, writing

pub mod generator;
pub mod layout;
pub mod naming;
pub mod plan;
pub mod scaffold;
pub mod stubs;

pub use generator::{
    CollisionError, EmittedFile, GenerateOptions, GenerateResult, Generator, PreviewFile,
};
pub use layout::{HandlerKind, ResourceLayout};
pub use naming::{ModelDescriptor, ResourceInput, pluralize_studly};
pub use plan::{EmissionPlan, FileRole, PlannedFile, Tokens};
pub use scaffold::{ApiServiceScaffold, RequestScaffold, ResourceScaffold, TransformerScaffold};
pub use stubs::{Stub, StubRenderer};
