//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns the fragments into text in a single pass.

/// A piece of generated code, independent of indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line of code.
    Line(String),
    /// An empty line.
    Blank,
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `/** ... */` block, one entry per ` * ` line.
    DocBlock(Vec<String>),
    /// A `// text` line comment.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn doc_block<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::DocBlock(lines.into_iter().map(Into::into).collect())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_block_collects_lines() {
        let block = CodeFragment::doc_block(["@label Name", "@type string"]);
        assert_eq!(
            block,
            CodeFragment::DocBlock(vec!["@label Name".into(), "@type string".into()])
        );
    }

    #[test]
    fn test_reference_renders_like_owner() {
        let fragments = vec![CodeFragment::comment("note"), CodeFragment::Blank];
        assert_eq!((&fragments).to_fragments(), fragments);
    }
}
