//! Salesforce field type to TypeScript type mapping.

use ftypes_schema::FieldType;

/// Map a field type to its TypeScript type expression.
///
/// Tags outside the known set map to `any`.
pub fn map_field_type(field_type: &FieldType) -> &'static str {
    match field_type {
        FieldType::Picklist
        | FieldType::String
        | FieldType::TextArea
        | FieldType::Reference
        | FieldType::Id => "string",
        FieldType::Boolean => "boolean",
        FieldType::Int
        | FieldType::Currency
        | FieldType::Percent
        | FieldType::Number
        | FieldType::Double => "number",
        FieldType::Date | FieldType::DateTime => "Date | string",
        FieldType::Other(_) => "any",
    }
}

/// Map a raw describe type tag (case-sensitive).
pub fn map_field_type_tag(tag: &str) -> &'static str {
    map_field_type(&FieldType::from(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_like_types() {
        for tag in ["picklist", "string", "textarea", "reference", "id"] {
            assert_eq!(map_field_type_tag(tag), "string", "tag {tag}");
        }
    }

    #[test]
    fn test_boolean_type() {
        assert_eq!(map_field_type_tag("boolean"), "boolean");
    }

    #[test]
    fn test_numeric_types() {
        for tag in ["int", "currency", "percent", "number", "double"] {
            assert_eq!(map_field_type_tag(tag), "number", "tag {tag}");
        }
    }

    #[test]
    fn test_date_types() {
        assert_eq!(map_field_type_tag("date"), "Date | string");
        assert_eq!(map_field_type_tag("datetime"), "Date | string");
    }

    #[test]
    fn test_unknown_types_fall_back_to_any() {
        for tag in ["multipicklist", "address", "base64", "", "String", "DATE", "time"] {
            assert_eq!(map_field_type_tag(tag), "any", "tag {tag:?}");
        }
    }
}
