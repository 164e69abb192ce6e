//! Child relationship properties.

use ftypes_codegen::{CodeFragment, Renderable};
use ftypes_schema::{ChildRelationship, ObjectDescription};

use crate::{ast::Field, docs::describe_child_relationship, naming::PLACEHOLDER_TYPE};

/// Heading emitted above the child relationship properties.
pub const CHILD_RELATIONSHIPS_HEADING: &str = "Child relationships";

/// Render one optional `Partial<Child>[]` property per named child
/// relationship, in input order.
///
/// Relationships without a `relationshipName` cannot be traversed and are
/// skipped. The heading comment is only emitted when something follows it.
pub fn render_child_relationships(object: &ObjectDescription) -> Vec<CodeFragment> {
    let properties: Vec<CodeFragment> = object
        .child_relationships
        .iter()
        .filter_map(child_relationship_property)
        .flat_map(|field| field.to_fragments())
        .collect();

    if properties.is_empty() {
        return properties;
    }

    std::iter::once(CodeFragment::comment(CHILD_RELATIONSHIPS_HEADING))
        .chain(properties)
        .collect()
}

fn child_relationship_property(child: &ChildRelationship) -> Option<Field> {
    let name = child.relationship_name.as_deref()?;
    let child_type = child.child_s_object.as_deref().unwrap_or(PLACEHOLDER_TYPE);

    Some(
        Field::new(name, format!("Partial<{}>[]", child_type))
            .doc_lines(describe_child_relationship(child).into_lines())
            .optional(),
    )
}
