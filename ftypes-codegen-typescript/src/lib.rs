//! TypeScript declaration generator for Salesforce sObject descriptions.
//!
//! Turns an [`ObjectDescription`](ftypes_schema::ObjectDescription) into the
//! text of a `.d.ts` file: one literal union per picklist field followed by
//! an object type with one optional property per field, relationship
//! properties for navigable references, and one array property per named
//! child relationship.
//!
//! # Usage
//!
//! ```
//! use ftypes_codegen_typescript::generate_type_declaration;
//! use ftypes_schema::{FieldDescription, ObjectDescription};
//!
//! let account = ObjectDescription {
//!     name: "Account".into(),
//!     label: "Account".into(),
//!     fields: vec![FieldDescription::new("Name", "string")],
//!     child_relationships: Vec::new(),
//! };
//!
//! let text = generate_type_declaration(&account);
//! assert!(text.starts_with("type Account = {"));
//! assert!(text.contains("  Name?: string;"));
//! ```
//!
//! Generation is pure: the same description always yields the same text, and
//! descriptions of different objects can be generated on different threads.

mod code_file;
mod docs;
mod generator;
mod naming;
mod picklist;
mod relationships;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use docs::{DocComment, describe_child_relationship, describe_field};
pub use generator::{Declaration, GenerateOptions, Generator, generate_type_declaration};
pub use naming::{
    OPEN_STRING, PLACEHOLDER_TYPE, declaration_file_name, picklist_type_name, string_literal,
};
pub use picklist::{PicklistTypes, build_picklist_types};
pub use relationships::{CHILD_RELATIONSHIPS_HEADING, render_child_relationships};
pub use type_mapper::{map_field_type, map_field_type_tag};
