//! Literal union types for picklist fields.

use ftypes_schema::{FieldDescription, FieldType};
use indexmap::IndexMap;

use crate::{
    ast::Union,
    naming::{OPEN_STRING, picklist_type_name, string_literal},
};

/// Picklist unions of one object plus the field → type name mapping.
#[derive(Debug, Clone, Default)]
pub struct PicklistTypes {
    /// One union per picklist field, in field order.
    pub definitions: Vec<Union>,
    /// Field API name to generated type name.
    pub type_names: IndexMap<String, String>,
}

impl PicklistTypes {
    /// Generated type name for a picklist field.
    pub fn type_name(&self, field_name: &str) -> Option<&str> {
        self.type_names.get(field_name).map(String::as_str)
    }
}

/// Build the union types for every picklist field of `object_name`.
///
/// Only active values take part. Unless the picklist is restricted the union
/// also admits any other string, and a union left without members collapses
/// to the empty-string literal.
pub fn build_picklist_types(object_name: &str, fields: &[FieldDescription]) -> PicklistTypes {
    let mut types = PicklistTypes::default();

    for field in fields
        .iter()
        .filter(|f| f.field_type == FieldType::Picklist)
    {
        let union = picklist_union(object_name, field);
        types
            .type_names
            .insert(field.name.clone(), union.name().to_string());
        types.definitions.push(union);
    }

    types
}

fn picklist_union(object_name: &str, field: &FieldDescription) -> Union {
    let active = field
        .picklist_values
        .iter()
        .filter(|p| p.active)
        .map(|p| string_literal(&p.value));

    let union = Union::new(picklist_type_name(object_name, &field.name))
        .private()
        .variants(active)
        .fallback("''");

    if field.restricted_picklist {
        union
    } else {
        union.variant(OPEN_STRING)
    }
}
