//! Documentation comments for generated properties.

use ftypes_codegen::{CodeFragment, Renderable};
use ftypes_schema::{ChildRelationship, FieldDescription};

/// Lines of a `/** ... */` block, without comment markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `@tag value`. Multi-line values continue on following lines.
    pub fn tag(mut self, tag: &str, value: impl AsRef<str>) -> Self {
        let mut lines = sanitize(value.as_ref()).into_iter();
        let first = lines.next().unwrap_or_default();
        if first.is_empty() {
            self.lines.push(format!("@{}", tag));
        } else {
            self.lines.push(format!("@{} {}", tag, first));
        }
        self.lines.extend(lines);
        self
    }

    /// Add a bare `@tag` marker.
    pub fn marker(mut self, tag: &str) -> Self {
        self.lines.push(format!("@{}", tag));
        self
    }

    /// Add `@tag value` only when `value` is present.
    pub fn tag_opt(self, tag: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(v) => self.tag(tag, v),
            None => self,
        }
    }

    /// Add a bare marker only when `on` is true.
    pub fn marker_if(self, tag: &str, on: bool) -> Self {
        if on { self.marker(tag) } else { self }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Renderable for DocComment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::DocBlock(self.lines.clone())]
    }
}

/// Split a value into comment-safe lines.
///
/// `*/` would end the comment early, so it is broken up.
fn sanitize(value: &str) -> Vec<String> {
    value
        .replace("*/", "*\\/")
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Build the documentation block for a field.
///
/// Label, type tag, nillable, createable and updateable are always present;
/// help text, formula, reference targets, relationship name, unique and
/// auto-number follow in that order when set.
pub fn describe_field(field: &FieldDescription) -> DocComment {
    DocComment::new()
        .tag("label", &field.label)
        .tag("type", field.field_type.as_str())
        .tag("nillable", field.nillable.to_string())
        .tag("createable", field.createable.to_string())
        .tag("updateable", field.updateable.to_string())
        .tag_opt("helpText", field.inline_help_text.as_deref())
        .tag_opt("formula", field.calculated_formula.as_deref())
        .tag_opt(
            "relatedTo",
            (!field.reference_to.is_empty()).then(|| field.reference_to.join(",")),
        )
        .tag_opt("relationshipName", field.relationship_name.as_deref())
        .marker_if("unique", field.unique)
        .marker_if("autoNumber", field.auto_number)
}

/// Build the documentation block for a child relationship property.
pub fn describe_child_relationship(child: &ChildRelationship) -> DocComment {
    DocComment::new()
        .tag_opt("childSObject", child.child_s_object.as_deref())
        .tag("field", &child.field)
        .tag("cascadeDelete", child.cascade_delete.to_string())
        .tag("restrictedDelete", child.restricted_delete.to_string())
}
