//! Core utilities and types for ftypes.
//!
//! This crate provides the file writer and the object-name pattern matcher
//! shared by the ftypes commands.

mod file;
mod wildcard;

// File operations
pub use file::{File, WriteResult, relative_to};
// Name matching
pub use wildcard::{Pattern, filter_names, has_wildcard, wild_test};
