//! Shared code generation utilities for ftypes.
//!
//! This crate provides the language-agnostic building blocks used by the
//! TypeScript declaration generator (`ftypes-codegen-typescript`).
//!
//! - [`builder`] - [`CodeBuilder`], [`CodeFragment`], [`Renderable`], [`Indent`]

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
