//! Types command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Report data from generating declaration files.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypesReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Directory the files were (or would be) written to.
    pub output_dir: PathBuf,
    /// One entry per object, in requested order.
    pub objects: Vec<GeneratedObject>,
    /// Requested patterns that matched nothing, and similar notes.
    pub warnings: Vec<String>,
}

/// Outcome for one object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedObject {
    pub sobject: String,
    pub path: PathBuf,
    pub status: FileStatus,
    /// Generated text, kept for dry runs only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Written,
    Unchanged,
    Preview,
}

impl TypesReport {
    /// Number of files whose content changed on disk.
    pub fn written(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| o.status == FileStatus::Written)
            .count()
    }
}

impl Report for TypesReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.objects.is_empty() {
            out.preformatted("No sObjects to generate.");
            return;
        }

        if self.dry_run {
            for object in &self.objects {
                out.divider(&object.path.display().to_string());
                out.preformatted(object.content.as_deref().unwrap_or_default());
            }
            out.divider("Summary");
            out.preformatted(&format!(
                "{} files would be generated",
                self.objects.len()
            ));
            return;
        }

        out.section(&format!("Generated ({})", self.objects.len()));
        for object in &self.objects {
            let path = object.path.display().to_string();
            match object.status {
                FileStatus::Unchanged => out.list_item(&format!("{} (unchanged)", path)),
                _ => out.added_item(&path),
            }
        }
        out.newline();
        out.key_value("Output", &self.output_dir.display().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn object(name: &str, status: FileStatus, content: Option<&str>) -> GeneratedObject {
        GeneratedObject {
            sobject: name.to_string(),
            path: PathBuf::from(format!("output/{}.d.ts", name)),
            status,
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn test_render_written_files() {
        let report = TypesReport {
            dry_run: false,
            output_dir: PathBuf::from("output"),
            objects: vec![
                object("Account", FileStatus::Written, None),
                object("Lead", FileStatus::Unchanged, None),
            ],
            warnings: vec!["pattern 'Foo*' matched no sObjects".into()],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(report.written(), 1);
        assert_eq!(
            out.lines,
            [
                "warning: pattern 'Foo*' matched no sObjects",
                "Generated (2):",
                "  + output/Account.d.ts",
                "  - output/Lead.d.ts (unchanged)",
                "",
                "Output: output",
            ]
        );
    }

    #[test]
    fn test_render_dry_run() {
        let report = TypesReport {
            dry_run: true,
            output_dir: PathBuf::from("output"),
            objects: vec![object("Account", FileStatus::Preview, Some("type Account = {};"))],
            warnings: Vec::new(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── output/Account.d.ts ──",
                "type Account = {};",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let report = TypesReport {
            dry_run: false,
            output_dir: PathBuf::from("output"),
            objects: vec![object("Account", FileStatus::Written, None)],
            warnings: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dryRun"], false);
        assert_eq!(json["objects"][0]["sobject"], "Account");
        assert_eq!(json["objects"][0]["status"], "written");
        assert!(json["objects"][0].get("content").is_none());
    }
}
