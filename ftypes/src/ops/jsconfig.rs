//! Jsconfig operation - map Lightning Web Components in `jsconfig.json`.

use std::{
    collections::BTreeMap,
    path::{Component, Path},
};

use eyre::{Result, WrapErr};
use ftypes_core::{File, WriteResult, relative_to};
use ftypes_schema::{JsConfig, SfdxProject};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::reports::{ComponentPath, JsconfigReport};

/// Options for the jsconfig operation.
pub struct JsconfigOptions<'a> {
    /// Where `jsconfig.json` is written.
    pub path: &'a Path,
    /// Current file content, or `None` to start from the default template.
    pub existing: Option<JsConfig>,
    /// Directory component paths are relative to, itself relative to the
    /// project root.
    pub base_url: &'a str,
}

/// Execute the jsconfig operation.
///
/// Rebuilds `compilerOptions.paths` from the components found under every
/// package directory and makes sure each package's declaration files are
/// included. Unknown keys of an existing file are kept.
pub fn jsconfig(project: &SfdxProject, opts: JsconfigOptions) -> Result<JsconfigReport> {
    let initialized = opts.existing.is_none();
    let mut config = opts.existing.unwrap_or_default();
    config.compiler_options.base_url = opts.base_url.to_string();

    let base_dir = project.root().join(opts.base_url);
    let packages = project.package_paths();

    let components = scan_components(&base_dir, &packages)?;
    config.compiler_options.paths = components
        .iter()
        .map(|c| (c.specifier.clone(), vec![c.path.clone()]))
        .collect();

    let added_includes: Vec<String> = packages
        .iter()
        .map(|pkg| format!("{}/**/*.d.ts", pkg))
        .filter(|pattern| config.add_include(pattern))
        .collect();

    let mut json = config
        .to_json_pretty()
        .wrap_err("failed to serialize jsconfig.json")?;
    json.push('\n');
    let changed = File::new(opts.path, json).write()? == WriteResult::Written;

    Ok(JsconfigReport {
        path: opts.path.to_path_buf(),
        initialized,
        base_url: opts.base_url.to_string(),
        components,
        added_includes,
        changed,
    })
}

/// Find `<pkg>/**/lwc/<component>/*.js` under `base_dir`.
///
/// Each component maps to one module file; when a folder holds several, the
/// file named after the folder wins. Results are sorted by specifier.
pub fn scan_components(base_dir: &Path, packages: &[String]) -> Result<Vec<ComponentPath>> {
    let mut found: BTreeMap<String, (String, bool)> = BTreeMap::new();

    for package in packages {
        let root = base_dir.join(package);
        if !root.is_dir() {
            warn!(package = %package, "package directory not found, skipping");
            continue;
        }

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry =
                entry.wrap_err_with(|| format!("failed to scan '{}'", root.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "js") {
                continue;
            }

            let Some(component) = component_name(path) else {
                continue;
            };
            let Some(relative) = relative_to(path, base_dir) else {
                continue;
            };

            let named_after_folder = path.file_stem().is_some_and(|stem| stem == component);
            let module = to_slash(relative);
            let specifier = format!("c/{}", component);
            debug!(specifier = %specifier, module = %module, "found component module");

            let replace = match found.get(&specifier) {
                Some((_, preferred)) => !preferred && named_after_folder,
                None => true,
            };
            if replace {
                found.insert(specifier, (module, named_after_folder));
            }
        }
    }

    Ok(found
        .into_iter()
        .map(|(specifier, (path, _))| ComponentPath { specifier, path })
        .collect())
}

/// Component folder name when `path` sits directly in `lwc/<component>/`.
fn component_name(path: &Path) -> Option<&str> {
    let folder = path.parent()?;
    let lwc = folder.parent()?;
    if lwc.file_name()? != "lwc" {
        return None;
    }
    folder.file_name()?.to_str()
}

fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
