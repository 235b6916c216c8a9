//! Project manifest (`apigen.toml`) for the apigen scaffolding generator.
//!
//! The manifest describes the panels of the target project and, for each
//! panel, the namespace/directory pairs resources are generated into.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    ApigenToml, DEFAULT_DIRECTORY, DEFAULT_NAMESPACE, DEFAULT_PANEL, DEFAULT_ROUTE_PREFIX,
    MANIFEST_FILE, Manifest, Panel, ParseContext, ProjectConfig, ResourceLocation, starter_manifest,
};
