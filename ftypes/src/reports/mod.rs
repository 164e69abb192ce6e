//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target or print them as JSON.

mod jsconfig;
mod output;
mod types;

pub use jsconfig::{ComponentPath, JsconfigReport};
pub use output::{Report, TerminalOutput, print_json};
pub use types::{FileStatus, GeneratedObject, TypesReport};
