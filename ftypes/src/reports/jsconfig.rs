//! Jsconfig command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Report data from updating `jsconfig.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsconfigReport {
    /// Path of the written file.
    pub path: PathBuf,
    /// Whether the file was started from the default template.
    pub initialized: bool,
    pub base_url: String,
    /// Component module mappings, sorted by specifier.
    pub components: Vec<ComponentPath>,
    /// Patterns newly appended to `include`.
    pub added_includes: Vec<String>,
    /// Whether the file content changed on disk.
    pub changed: bool,
}

/// One `compilerOptions.paths` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentPath {
    /// Module specifier, e.g. `c/accountCard`.
    pub specifier: String,
    /// Module file relative to the base URL.
    pub path: String,
}

impl Report for JsconfigReport {
    fn render(&self, out: &mut dyn Output) {
        let verb = match (self.initialized, self.changed) {
            (_, false) => "Unchanged",
            (true, true) => "Created",
            (false, true) => "Updated",
        };
        out.key_value(verb, &self.path.display().to_string());
        out.key_value("Base URL", &self.base_url);

        out.newline();
        if self.components.is_empty() {
            out.preformatted("No Lightning Web Components found.");
        } else {
            out.section(&format!("Components ({})", self.components.len()));
            for component in &self.components {
                out.list_item(&format!("{} -> {}", component.specifier, component.path));
            }
        }

        if !self.added_includes.is_empty() {
            out.newline();
            out.section("Added to include");
            for pattern in &self.added_includes {
                out.added_item(pattern);
            }
        }
    }
}
