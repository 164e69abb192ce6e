//! TypeScript object type, type alias and union builders.

use ftypes_codegen::{CodeBuilder, CodeFragment, Renderable};

fn export_prefix(exported: bool) -> &'static str {
    if exported { "export " } else { "" }
}

/// A property of a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Vec<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: Vec::new(),
            optional: false,
            readonly: false,
        }
    }

    /// Append one line to the doc block.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Replace the doc block.
    pub fn doc_lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.doc = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Set readonly from a flag.
    pub fn readonly_if(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    fn declaration(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (!self.doc.is_empty())
            .then(|| CodeFragment::DocBlock(self.doc.clone()))
            .into_iter()
            .chain(std::iter::once(CodeFragment::Line(self.declaration())))
            .collect()
    }
}

/// Builder for TypeScript object types (`type Foo = { ... };`).
///
/// The body is an ordered list of fragments, so properties and free-form
/// members (comments, blank lines) keep the order they were added in.
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    body: Vec<CodeFragment>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
            exported: true,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.body.extend(field.to_fragments());
        self
    }

    /// Append raw body fragments.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().render(self).build()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = export_prefix(self.exported);
        let fragment = if self.body.is_empty() {
            CodeFragment::Line(format!("{}type {} = {{}};", export, self.name))
        } else {
            CodeFragment::block(
                format!("{}type {} = {{", export, self.name),
                self.body.clone(),
                Some("};".to_string()),
            )
        };
        vec![fragment]
    }
}

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().render(self).build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = export_prefix(self.exported);
        vec![CodeFragment::Line(format!(
            "{}type {} = {};",
            export, self.name, self.ty
        ))]
    }
}

/// Builder for TypeScript union types.
///
/// A union without variants renders as `fallback` (`never` unless set),
/// so the declaration always stays valid.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
    fallback: String,
    exported: bool,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            fallback: "never".to_string(),
            exported: true,
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }

    /// Type used when no variant was added.
    pub fn fallback(mut self, ty: impl Into<String>) -> Self {
        self.fallback = ty.into();
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The right-hand side of the declaration.
    pub fn body(&self) -> String {
        if self.variants.is_empty() {
            self.fallback.clone()
        } else {
            self.variants.join(" | ")
        }
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        CodeBuilder::typescript().render(self).build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        TypeAlias {
            name: self.name.clone(),
            ty: self.body(),
            exported: self.exported,
        }
        .to_fragments()
    }
}
