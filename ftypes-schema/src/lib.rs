//! Input models for ftypes.
//!
//! - [`ObjectDescription`] and friends: the sObject describe payload
//! - [`Config`]: the optional `ftypes.toml`
//! - [`SfdxProject`]: the Salesforce DX project file
//! - [`JsConfig`]: the LWC `jsconfig.json`

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod describe;
mod error;
mod jsconfig;
mod project;
mod serde_helpers;

pub use config::{CONFIG_FILE, Config, JsconfigConfig, TypesConfig, is_api_version};
pub use describe::{ChildRelationship, FieldDescription, FieldType, ObjectDescription, PicklistValue};
pub use error::{Error, Result, SourceContext};
pub use jsconfig::{CompilerOptions, JSCONFIG_FILE, JsConfig, TypeAcquisition};
pub use project::{PROJECT_FILE, PackageDirectory, SfdxProject};
