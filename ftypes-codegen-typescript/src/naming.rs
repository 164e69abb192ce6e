//! Names and literals used in generated declarations.

/// Stand-in type for a relationship whose target object is unknown.
pub const PLACEHOLDER_TYPE: &str = "Record<string, unknown>";

/// Union member that keeps a literal union open to any string while
/// preserving editor completion for the listed literals.
pub const OPEN_STRING: &str = "(string & {})";

/// Name of the literal union generated for a picklist field.
pub fn picklist_type_name(object_name: &str, field_name: &str) -> String {
    format!("{}_{}_Picklist", object_name, field_name)
}

/// Declaration file name for an object.
pub fn declaration_file_name(object_name: &str) -> String {
    format!("{}.d.ts", object_name)
}

/// Quote `value` as a single-quoted TypeScript string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
