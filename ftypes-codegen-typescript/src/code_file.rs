//! CodeFile abstraction for structured declaration file generation.
//!
//! A file is an ordered list of top-level declarations separated by blank
//! lines, optionally wrapped in an ambient `declare module` block.

use ftypes_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::naming::string_literal;

/// A structured representation of a TypeScript declaration file.
///
/// # Example
///
/// ```
/// use ftypes_codegen_typescript::{CodeFile, ast::TypeAlias};
///
/// let code = CodeFile::new()
///     .add(TypeAlias::new("A", "string").private())
///     .add(TypeAlias::new("B", "number").private())
///     .render();
/// assert_eq!(code, "type A = string;\n\ntype B = number;\n");
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    module: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap every declaration in `declare module '<name>' { ... }`.
    pub fn module(mut self, name: Option<String>) -> Self {
        self.module = name;
        self
    }

    /// Add a top-level declaration (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple top-level declarations.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut declarations = Vec::new();
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                declarations.push(CodeFragment::Blank);
            }
            declarations.extend(fragments.iter().cloned());
        }

        let mut builder = CodeBuilder::new(indent);
        match &self.module {
            Some(name) => builder.apply_fragment(CodeFragment::block(
                format!("declare module {} {{", string_literal(name)),
                declarations,
                Some("}".to_string()),
            )),
            None => {
                builder.emit(&declarations);
            }
        }
        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
