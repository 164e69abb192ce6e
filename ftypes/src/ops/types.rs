//! Types operation - describe sObjects and write their declaration files.

use std::{
    path::Path,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread,
};

use eyre::{Result, WrapErr};
use ftypes_codegen_typescript::{Declaration, Generator};
use ftypes_core::{File, WriteResult, filter_names, has_wildcard};
use indexmap::IndexSet;
use tracing::{debug, info, warn};

use crate::{
    format::Prettier,
    org::SchemaSource,
    reports::{FileStatus, GeneratedObject, TypesReport},
};

/// Options for the types operation.
pub struct TypesOptions<'a> {
    /// Object names or wildcard patterns; empty means every customizable object.
    pub sobjects: &'a [String],
    /// Directory receiving `<Name>.d.ts` files.
    pub output_dir: &'a Path,
    pub generator: &'a Generator,
    /// Formatter applied to each file before writing.
    pub prettier: Option<&'a Prettier>,
    /// Maximum number of objects processed at once.
    pub jobs: usize,
    /// Whether to keep the generated text instead of writing it.
    pub dry_run: bool,
}

/// Execute the types operation.
///
/// Objects are described and generated on up to `jobs` threads; the report
/// lists them in requested order. The first failure stops the operation.
pub fn types(source: &dyn SchemaSource, opts: TypesOptions) -> Result<TypesReport> {
    let (names, warnings) = resolve_sobjects(source, opts.sobjects)?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    info!(count = names.len(), jobs = opts.jobs, "generating declarations");

    let objects = run_pool(&names, opts.jobs, |sobject| {
        generate_one(source, sobject, &opts)
    })?;

    Ok(TypesReport {
        dry_run: opts.dry_run,
        output_dir: opts.output_dir.to_path_buf(),
        objects,
        warnings,
    })
}

/// Expand the requested names into the list of objects to generate.
///
/// Plain names are used as given; wildcard patterns are matched against the
/// source's object list, which is only fetched when needed. Duplicates are
/// dropped, keeping the first occurrence. Returns the names and a warning per
/// pattern that matched nothing.
pub fn resolve_sobjects(
    source: &dyn SchemaSource,
    requested: &[String],
) -> Result<(Vec<String>, Vec<String>)> {
    if requested.is_empty() {
        let all = source.list_sobjects().wrap_err("failed to list sObjects")?;
        return Ok((all, Vec::new()));
    }

    let available = if requested.iter().any(|r| has_wildcard(r)) {
        source.list_sobjects().wrap_err("failed to list sObjects")?
    } else {
        Vec::new()
    };

    let mut names = IndexSet::new();
    let mut warnings = Vec::new();
    for entry in requested {
        if !has_wildcard(entry) {
            names.insert(entry.clone());
            continue;
        }

        let matched = filter_names(&available, std::slice::from_ref(entry));
        debug!(pattern = %entry, matched = matched.len(), "expanded pattern");
        if matched.is_empty() {
            warnings.push(format!("pattern '{}' matched no sObjects", entry));
        }
        names.extend(matched);
    }

    Ok((names.into_iter().collect(), warnings))
}

fn generate_one(
    source: &dyn SchemaSource,
    sobject: &str,
    opts: &TypesOptions,
) -> Result<GeneratedObject> {
    let object = source
        .describe(sobject)
        .wrap_err_with(|| format!("failed to describe '{}'", sobject))?;

    let Declaration {
        object_name,
        file_name,
        mut content,
    } = opts.generator.declaration(&object);

    match opts.prettier {
        Some(prettier) => content = prettier.format(&file_name, &content)?,
        None => content.push('\n'),
    }

    let path = opts.output_dir.join(&file_name);
    if opts.dry_run {
        return Ok(GeneratedObject {
            sobject: object_name,
            path,
            status: FileStatus::Preview,
            content: Some(content),
        });
    }

    let status = match File::new(&path, content).write()? {
        WriteResult::Written => FileStatus::Written,
        WriteResult::Unchanged => FileStatus::Unchanged,
    };
    info!(sobject = %object_name, path = %path.display(), "generated");

    Ok(GeneratedObject {
        sobject: object_name,
        path,
        status,
        content: None,
    })
}

/// Run `task` over `items` on up to `jobs` scoped threads.
///
/// Results keep the order of `items`. Once a task fails no further items are
/// started, and the first failure in item order is returned.
fn run_pool<T, R, F>(items: &[T], jobs: usize, task: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R> + Sync,
{
    let next = AtomicUsize::new(0);
    let failed = AtomicBool::new(false);
    let slots: Mutex<Vec<Option<Result<R>>>> = Mutex::new(items.iter().map(|_| None).collect());
    let workers = jobs.clamp(1, items.len().max(1));

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                while !failed.load(Ordering::Relaxed) {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(item) = items.get(index) else {
                        break;
                    };

                    let result = task(item);
                    if result.is_err() {
                        failed.store(true, Ordering::Relaxed);
                    }
                    slots.lock().unwrap_or_else(PoisonError::into_inner)[index] = Some(result);
                }
            });
        }
    });

    slots
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use eyre::eyre;
    use ftypes_schema::{FieldDescription, ObjectDescription};
    use tempfile::TempDir;

    use super::*;

    struct FakeSource {
        objects: Vec<ObjectDescription>,
        list_calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(names: &[&str]) -> Self {
            let objects = names
                .iter()
                .map(|name| ObjectDescription {
                    name: name.to_string(),
                    label: name.to_string(),
                    fields: vec![FieldDescription::new("Name", "string")],
                    child_relationships: Vec::new(),
                })
                .collect();
            Self {
                objects,
                list_calls: AtomicUsize::new(0),
            }
        }
    }

    impl SchemaSource for FakeSource {
        fn list_sobjects(&self) -> Result<Vec<String>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.objects.iter().map(|o| o.name.clone()).collect())
        }

        fn describe(&self, sobject: &str) -> Result<ObjectDescription> {
            self.objects
                .iter()
                .find(|o| o.name == sobject)
                .cloned()
                .ok_or_else(|| eyre!("sObject type '{}' is not supported", sobject))
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn options<'a>(
        sobjects: &'a [String],
        output_dir: &'a Path,
        generator: &'a Generator,
    ) -> TypesOptions<'a> {
        TypesOptions {
            sobjects,
            output_dir,
            generator,
            prettier: None,
            jobs: 4,
            dry_run: false,
        }
    }

    #[test]
    fn test_resolve_all_when_none_requested() {
        let source = FakeSource::new(&["Account", "Contact"]);
        let (names, warnings) = resolve_sobjects(&source, &[]).unwrap();
        assert_eq!(names, ["Account", "Contact"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_resolve_plain_names_without_listing() {
        let source = FakeSource::new(&["Account"]);
        let (names, _) = resolve_sobjects(&source, &strings(&["Lead", "Account", "Lead"])).unwrap();
        assert_eq!(names, ["Lead", "Account"]);
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_resolve_wildcards_in_requested_order() {
        let source = FakeSource::new(&["Account", "Invoice__c", "Contact", "Invoice_Line__c"]);
        let requested = strings(&["invoice*__c", "Account", "Nothing*"]);
        let (names, warnings) = resolve_sobjects(&source, &requested).unwrap();

        assert_eq!(names, ["Invoice__c", "Invoice_Line__c", "Account"]);
        assert_eq!(warnings, ["pattern 'Nothing*' matched no sObjects"]);
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_writes_one_file_per_object() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("types");
        let source = FakeSource::new(&["Account", "Contact", "Lead"]);
        let generator = Generator::new();
        let requested = strings(&["Lead", "Account"]);

        let report = types(&source, options(&requested, &out_dir, &generator)).unwrap();

        let names: Vec<_> = report.objects.iter().map(|o| o.sobject.as_str()).collect();
        assert_eq!(names, ["Lead", "Account"]);
        assert!(report.objects.iter().all(|o| o.status == FileStatus::Written));

        let account = fs::read_to_string(out_dir.join("Account.d.ts")).unwrap();
        assert!(account.starts_with("type Account = {"));
        assert!(account.ends_with("};\n"));
        assert!(!out_dir.join("Contact.d.ts").exists());
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let source = FakeSource::new(&["Account"]);
        let generator = Generator::new();
        let requested = strings(&["Account"]);

        types(&source, options(&requested, temp.path(), &generator)).unwrap();
        let report = types(&source, options(&requested, temp.path(), &generator)).unwrap();
        assert_eq!(report.objects[0].status, FileStatus::Unchanged);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("types");
        let source = FakeSource::new(&["Account"]);
        let generator = Generator::new().module_prefix("sobjects/");
        let requested = strings(&["Account"]);

        let report = types(
            &source,
            TypesOptions {
                dry_run: true,
                ..options(&requested, &out_dir, &generator)
            },
        )
        .unwrap();

        assert!(!out_dir.exists());
        let object = &report.objects[0];
        assert_eq!(object.status, FileStatus::Preview);
        assert!(
            object
                .content
                .as_deref()
                .unwrap()
                .starts_with("declare module 'sobjects/Account' {")
        );
    }

    #[test]
    fn test_describe_failure_names_the_object() {
        let temp = TempDir::new().unwrap();
        let source = FakeSource::new(&["Account"]);
        let generator = Generator::new();
        let requested = strings(&["Account", "Missing__c"]);

        let err = types(&source, options(&requested, temp.path(), &generator)).unwrap_err();
        assert_eq!(err.to_string(), "failed to describe 'Missing__c'");
    }

    #[test]
    fn test_pool_keeps_item_order() {
        let items: Vec<usize> = (0..50).collect();
        let results = run_pool(&items, 8, |n| Ok(n * 2)).unwrap();
        assert_eq!(results, items.iter().map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_pool_returns_first_failure_in_order() {
        let items: Vec<usize> = (0..10).collect();
        let err = run_pool(&items, 1, |n| {
            if *n >= 3 {
                Err(eyre!("item {} failed", n))
            } else {
                Ok(*n)
            }
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "item 3 failed");
    }

    #[test]
    fn test_pool_with_no_items() {
        let items: Vec<usize> = Vec::new();
        let results: Vec<usize> = run_pool(&items, 4, |n| Ok(*n)).unwrap();
        assert!(results.is_empty());
    }
}
