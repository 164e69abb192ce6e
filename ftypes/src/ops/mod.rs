//! Core operations.
//!
//! This module contains the business logic for ftypes commands,
//! separated from CLI argument parsing and output rendering.

pub mod jsconfig;
pub mod types;

pub use jsconfig::jsconfig;
pub use types::types;
