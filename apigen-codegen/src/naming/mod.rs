//! Resource naming: input normalization, model resolution and plurals.

mod plural;
mod resource;

pub use plural::pluralize_studly;
pub use resource::{ModelDescriptor, ResourceInput};
