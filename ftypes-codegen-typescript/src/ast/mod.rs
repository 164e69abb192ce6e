//! TypeScript AST builders for declaration files.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod types;

pub use types::{Field, ObjectType, TypeAlias, Union};
