use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for ftypes-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the file content and name together so parse and validation errors
/// can point at the offending span.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::JsonParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(ftypes::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON")]
    #[diagnostic(code(ftypes::json_parse))]
    JsonParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed describe result for '{sobject}'")]
    #[diagnostic(
        code(ftypes::describe),
        help("expected the output of 'sf sobject describe --json' or a raw describe document")
    )]
    Describe {
        sobject: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no sfdx-project.json found in '{dir}' or any parent directory")]
    #[diagnostic(
        code(ftypes::project_not_found),
        help("run this command from inside a Salesforce DX project")
    )]
    ProjectNotFound { dir: PathBuf },

    #[error("{message}")]
    #[diagnostic(code(ftypes::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a describe error for `sobject`.
    pub fn describe(sobject: impl Into<String>, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Describe {
            sobject: sobject.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("{\"a\": 1}", 1, 3), Some(2));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        // line 3 starts after "{\n" (2) and "  \"a\": 1,\n" (10)
        assert_eq!(offset_of(src, 3, 3), Some(14));
    }

    #[test]
    fn test_offset_of_eof_error() {
        assert_eq!(offset_of("", 0, 0), None);
    }

    #[test]
    fn test_json_error_has_span() {
        let ctx = SourceContext::new("{ nope }", "jsconfig.json");
        let source = serde_json::from_str::<serde_json::Value>(ctx.src()).unwrap_err();
        match *ctx.json_error(source) {
            Error::JsonParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
