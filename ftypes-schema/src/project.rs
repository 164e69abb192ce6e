//! Salesforce DX project file (`sfdx-project.json`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result, SourceContext, serde_helpers::null_as_default};

/// Project file name.
pub const PROJECT_FILE: &str = "sfdx-project.json";

/// A parsed `sfdx-project.json` and the directory holding it.
#[derive(Debug, Clone)]
pub struct SfdxProject {
    root: PathBuf,
    json: SfdxProjectJson,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SfdxProjectJson {
    #[serde(default, deserialize_with = "null_as_default")]
    package_directories: Vec<PackageDirectory>,
}

/// One entry of `packageDirectories`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageDirectory {
    pub path: String,
    #[serde(default)]
    pub default: bool,
}

impl SfdxProject {
    /// Find the project containing `start`, walking up parent directories.
    pub fn resolve(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        let root = start
            .ancestors()
            .find(|dir| dir.join(PROJECT_FILE).is_file())
            .ok_or_else(|| {
                Box::new(Error::ProjectNotFound {
                    dir: start.to_path_buf(),
                })
            })?;
        Self::open(root)
    }

    /// Open the project file in `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let path = root.join(PROJECT_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let ctx = SourceContext::new(content, path.display().to_string());
        let json = serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e))?;
        Ok(Self { root, json })
    }

    /// Directory containing `sfdx-project.json`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Package directories in declaration order.
    pub fn package_directories(&self) -> &[PackageDirectory] {
        &self.json.package_directories
    }

    /// Package directory paths, with separators normalized to `/`.
    pub fn package_paths(&self) -> Vec<String> {
        self.json
            .package_directories
            .iter()
            .map(|p| p.path.replace('\\', "/").trim_end_matches('/').to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const PROJECT: &str = r#"{
        "packageDirectories": [
            { "path": "force-app", "default": true },
            { "path": "unpackaged/" }
        ],
        "namespace": "",
        "sourceApiVersion": "61.0"
    }"#;

    #[test]
    fn test_open_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), PROJECT).unwrap();

        let project = SfdxProject::open(temp.path()).unwrap();
        assert_eq!(project.package_directories().len(), 2);
        assert!(project.package_directories()[0].default);
        assert_eq!(project.package_paths(), vec!["force-app", "unpackaged"]);
    }

    #[test]
    fn test_resolve_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), PROJECT).unwrap();
        let nested = temp.path().join("force-app").join("main");
        fs::create_dir_all(&nested).unwrap();

        let project = SfdxProject::resolve(&nested).unwrap();
        assert_eq!(project.root(), temp.path());
    }

    #[test]
    fn test_resolve_without_project() {
        let temp = TempDir::new().unwrap();
        let err = SfdxProject::resolve(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::ProjectNotFound { .. }));
    }

    #[test]
    fn test_invalid_json_reports_span() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_FILE), "{ \"packageDirectories\": [ }").unwrap();
        let err = SfdxProject::open(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::JsonParse { span: Some(_), .. }));
    }
}
