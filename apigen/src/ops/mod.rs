//! Core operations.
//!
//! This module contains the business logic for apigen commands,
//! separated from CLI argument parsing and output rendering.

pub mod info;
pub mod make;

pub use info::info;
pub use make::{MakeKind, MakeOptions, make};
