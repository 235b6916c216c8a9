//! Core utilities and types for the apigen scaffolding generator.
//!
//! This crate provides the fundamental value types and file operations
//! shared by the manifest, codegen and CLI crates.

mod file;
mod namespace;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult, find_collisions};
// Fundamental types
pub use namespace::{Namespace, is_php_identifier};
// String utilities
pub use utils::{split_last_studly_word, to_studly_case};
