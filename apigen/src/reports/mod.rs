//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod info;
mod make;
mod output;

pub use info::{InfoReport, LocationInfo, PanelInfo};
pub use make::{MakeReport, MakeResult, PreviewEntry, WrittenFile};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub use output::BufferOutput;
