//! Indentation-aware text buffer that renders [`CodeFragment`]s.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated code line by line at the current indentation.
///
/// # Example
///
/// ```
/// use ftypes_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let code = CodeBuilder::typescript()
///     .render(&vec![
///         CodeFragment::doc_block(["@label Account Name"]),
///         CodeFragment::line("Name?: string;"),
///     ])
///     .build();
///
/// assert_eq!(code, "/**\n * @label Account Name\n */\nName?: string;\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Write `s` on its own line at the current depth.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write an empty line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write a `/** ... */` block with one ` * ` line per entry.
    pub fn push_doc_block(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            match line.as_str() {
                "" => self.push_line(" *"),
                text => self.push_line(&format!(" * {}", text)),
            };
        }
        self.push_line(" */")
    }

    /// Write a `// text` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("// {}", text))
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Consuming form of [`emit`](Self::emit).
    pub fn render(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(header: &str, body: Vec<CodeFragment>, close: &str) -> CodeFragment {
        CodeFragment::block(header, body, Some(close.to_string()))
    }

    #[test]
    fn test_block_indents_body() {
        let code = CodeBuilder::typescript()
            .render(&vec![block(
                "type Account = {",
                vec![CodeFragment::line("Name?: string;")],
                "};",
            )])
            .build();
        assert_eq!(code, "type Account = {\n  Name?: string;\n};\n");
    }

    #[test]
    fn test_nested_blocks_with_wide_indent() {
        let code = CodeBuilder::new(Indent::WIDE)
            .render(&vec![block(
                "declare module 'm' {",
                vec![block("type A = {", vec![CodeFragment::line("x: number;")], "};")],
                "}",
            )])
            .build();
        assert_eq!(
            code,
            "declare module 'm' {\n    type A = {\n        x: number;\n    };\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let code = CodeBuilder::typescript()
            .render(&vec![block(
                "type A = {",
                vec![
                    CodeFragment::line("a?: string;"),
                    CodeFragment::Blank,
                    CodeFragment::comment("Child relationships"),
                ],
                "};",
            )])
            .build();
        assert_eq!(
            code,
            "type A = {\n  a?: string;\n\n  // Child relationships\n};\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_doc_block_indented_with_empty_line() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_indent()
            .push_doc_block(&["first".to_string(), String::new(), "third".to_string()]);
        assert_eq!(
            builder.build(),
            "  /**\n   * first\n   *\n   * third\n   */\n"
        );
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::typescript();
        builder.apply_fragment(CodeFragment::block(
            "header",
            vec![CodeFragment::line("body")],
            None,
        ));
        assert_eq!(builder.build(), "header\n  body\n");
    }
}
