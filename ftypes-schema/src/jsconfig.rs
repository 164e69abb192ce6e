//! `jsconfig.json` model for Lightning Web Components projects.
//!
//! Known keys are typed; anything else found in an existing file is kept in
//! the `extra` maps and written back untouched.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, SourceContext};

/// File name of the config.
pub const JSCONFIG_FILE: &str = "jsconfig.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsConfig {
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
    pub type_acquisition: TypeAcquisition,
    pub allow_js: bool,
    #[serde(rename = "checkJS")]
    pub check_js: bool,
    pub target: String,
    pub module: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    pub experimental_decorators: bool,
    pub base_url: String,
    pub skip_lib_check: bool,
    /// Module specifier (`c/<component>`) to file list.
    pub paths: IndexMap<String, Vec<String>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeAcquisition {
    pub include: Vec<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Default for JsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions::default(),
            include: vec!["**/*".into(), ".sfdx/typings/lwc/**/*.d.ts".into()],
            type_acquisition: TypeAcquisition::default(),
            allow_js: true,
            check_js: true,
            target: "ESNext".into(),
            module: "NodeNext".into(),
            extra: IndexMap::new(),
        }
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            experimental_decorators: true,
            base_url: ".".into(),
            skip_lib_check: true,
            paths: IndexMap::new(),
            extra: IndexMap::new(),
        }
    }
}

impl Default for TypeAcquisition {
    fn default() -> Self {
        Self {
            include: vec!["jest".into()],
            extra: IndexMap::new(),
        }
    }
}

impl JsConfig {
    /// Read an existing `jsconfig.json`; `None` when the file is absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(path, e)),
        };
        Self::from_str_with_filename(&content, &path.display().to_string()).map(Some)
    }

    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        serde_json::from_str(content).map_err(|e| ctx.json_error(e))
    }

    /// Add `pattern` to `include` unless it is already listed.
    ///
    /// Returns true when the pattern was added.
    pub fn add_include(&mut self, pattern: &str) -> bool {
        if self.include.iter().any(|p| p == pattern) {
            return false;
        }
        self.include.push(pattern.to_string());
        true
    }

    /// Serialize as 2-space indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
