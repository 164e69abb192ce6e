//! Object type generator.

use ftypes_codegen::{CodeFragment, Indent};
use ftypes_schema::{FieldDescription, ObjectDescription};

use crate::{
    CodeFile,
    ast::{Field, ObjectType},
    docs::describe_field,
    naming::{PLACEHOLDER_TYPE, declaration_file_name},
    picklist::{PicklistTypes, build_picklist_types},
    relationships::render_child_relationships,
    type_mapper::map_field_type,
};

/// Output options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// When set, wrap the output in `declare module '<prefix><ObjectName>'`
    /// and export every declaration.
    pub module_prefix: Option<String>,
    pub indent: Indent,
}

/// Generated declaration file for one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Object API name.
    pub object_name: String,
    /// File name, e.g. `Account.d.ts`.
    pub file_name: String,
    pub content: String,
}

/// TypeScript declaration generator for sObject descriptions.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Wrap output in a `declare module` block named `<prefix><ObjectName>`.
    pub fn module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.module_prefix = Some(prefix.into());
        self
    }

    /// Generate the declaration text for one object.
    ///
    /// Picklist unions come first, then the object type with one optional
    /// property per field (in input order) and its child relationships.
    /// The result carries no leading or trailing whitespace.
    pub fn generate(&self, object: &ObjectDescription) -> String {
        let exported = self.options.module_prefix.is_some();
        let picklists = build_picklist_types(&object.name, &object.fields);

        let mut object_type = ObjectType::new(&object.name).exported(exported);
        for field in &object.fields {
            for property in field_properties(field, &picklists) {
                object_type = object_type.field(property);
            }
        }

        let relationships = render_child_relationships(object);
        if !relationships.is_empty() {
            if !object.fields.is_empty() {
                object_type = object_type.fragments([CodeFragment::Blank]);
            }
            object_type = object_type.fragments(relationships);
        }

        let module = self
            .options
            .module_prefix
            .as_ref()
            .map(|prefix| format!("{}{}", prefix, object.name));

        CodeFile::new()
            .module(module)
            .add_all(
                picklists
                    .definitions
                    .into_iter()
                    .map(|union| union.exported(exported)),
            )
            .add(object_type)
            .render_with_indent(self.options.indent)
            .trim()
            .to_string()
    }

    /// Generate the declaration file for one object.
    pub fn declaration(&self, object: &ObjectDescription) -> Declaration {
        Declaration {
            object_name: object.name.clone(),
            file_name: declaration_file_name(&object.name),
            content: self.generate(object),
        }
    }
}

/// Generate the declaration text for one object with default options.
pub fn generate_type_declaration(object: &ObjectDescription) -> String {
    Generator::new().generate(object)
}

/// The property for a field, followed by its relationship property when the
/// field is a navigable reference.
fn field_properties(field: &FieldDescription, picklists: &PicklistTypes) -> Vec<Field> {
    let doc = describe_field(field);
    let ty = picklists
        .type_name(&field.name)
        .unwrap_or_else(|| map_field_type(&field.field_type));

    let mut properties = vec![
        Field::new(&field.name, ty)
            .doc_lines(doc.lines().iter().cloned())
            .optional()
            .readonly_if(field.is_read_only()),
    ];

    if let Some(relationship) = &field.relationship_name {
        let targets = if field.reference_to.is_empty() {
            PLACEHOLDER_TYPE.to_string()
        } else {
            field.reference_to.join(" | ")
        };
        properties.push(
            Field::new(relationship, format!("Partial<{}>", targets))
                .doc_lines(doc.into_lines())
                .optional(),
        );
    }

    properties
}

#[cfg(test)]
mod tests {
    use ftypes_schema::{ChildRelationship, PicklistValue};

    use super::*;

    fn object(name: &str, fields: Vec<FieldDescription>) -> ObjectDescription {
        ObjectDescription {
            name: name.into(),
            label: name.into(),
            fields,
            child_relationships: Vec::new(),
        }
    }

    #[test]
    fn test_account_with_name() {
        let name = FieldDescription {
            label: "Account Name".into(),
            nillable: false,
            createable: true,
            updateable: true,
            ..FieldDescription::new("Name", "string")
        };
        let out = generate_type_declaration(&object("Account", vec![name]));

        assert_eq!(
            out,
            "type Account = {\n\
            \x20 /**\n\
            \x20  * @label Account Name\n\
            \x20  * @type string\n\
            \x20  * @nillable false\n\
            \x20  * @createable true\n\
            \x20  * @updateable true\n\
            \x20  */\n\
            \x20 Name?: string;\n\
            };"
        );
    }

    #[test]
    fn test_field_order_is_preserved() {
        let fields = ["B", "A", "C"]
            .into_iter()
            .map(|n| FieldDescription::new(n, "string"))
            .collect();
        let out = generate_type_declaration(&object("Thing__c", fields));

        let b = out.find("B?: string;").unwrap();
        let a = out.find("A?: string;").unwrap();
        let c = out.find("C?: string;").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn test_picklist_property_uses_union_name() {
        let status = FieldDescription {
            picklist_values: vec![PicklistValue::active("Open"), PicklistValue::active("Closed")],
            restricted_picklist: true,
            ..FieldDescription::new("Status", "picklist")
        };
        let out = generate_type_declaration(&object("Lead", vec![status]));

        assert!(out.starts_with("type Lead_Status_Picklist = 'Open' | 'Closed';\n\ntype Lead = {"));
        assert!(out.contains("  Status?: Lead_Status_Picklist;"));
    }

    #[test]
    fn test_calculated_reference_field() {
        let field = FieldDescription {
            calculated: true,
            reference_to: vec!["Account".into()],
            relationship_name: Some("Parent".into()),
            ..FieldDescription::new("ParentId", "reference")
        };
        let out = generate_type_declaration(&object("Account", vec![field]));

        assert!(out.contains("  readonly ParentId?: string;"));
        assert!(out.contains("  Parent?: Partial<Account>;"));
        assert!(!out.contains("readonly Parent?"));
        // Both properties carry the same doc block.
        assert_eq!(out.matches("@relationshipName Parent").count(), 2);
    }

    #[test]
    fn test_auto_number_is_readonly() {
        let field = FieldDescription {
            auto_number: true,
            ..FieldDescription::new("CaseNumber", "string")
        };
        let out = generate_type_declaration(&object("Case", vec![field]));
        assert!(out.contains("  readonly CaseNumber?: string;"));
        assert!(out.contains("@autoNumber"));
    }

    #[test]
    fn test_polymorphic_reference_is_union() {
        let field = FieldDescription {
            reference_to: vec!["Contact".into(), "Lead".into()],
            relationship_name: Some("Who".into()),
            ..FieldDescription::new("WhoId", "reference")
        };
        let out = generate_type_declaration(&object("Task", vec![field]));
        assert!(out.contains("  Who?: Partial<Contact | Lead>;"));
    }

    #[test]
    fn test_relationship_without_targets_uses_placeholder() {
        let field = FieldDescription {
            relationship_name: Some("Owner".into()),
            ..FieldDescription::new("OwnerId", "reference")
        };
        let out = generate_type_declaration(&object("Thing__c", vec![field]));
        assert!(out.contains("  Owner?: Partial<Record<string, unknown>>;"));
    }

    #[test]
    fn test_unknown_type_is_any() {
        let out = generate_type_declaration(&object(
            "Account",
            vec![FieldDescription::new("BillingAddress", "address")],
        ));
        assert!(out.contains("  BillingAddress?: any;"));
    }

    #[test]
    fn test_child_relationships_follow_fields() {
        let mut account = object("Account", vec![FieldDescription::new("Name", "string")]);
        account.child_relationships = vec![ChildRelationship {
            child_s_object: Some("Contact".into()),
            field: "AccountId".into(),
            relationship_name: Some("Contacts".into()),
            cascade_delete: false,
            restricted_delete: false,
        }];
        let out = generate_type_declaration(&account);

        assert!(out.contains("  Name?: string;\n\n  // Child relationships\n  /**\n"));
        assert!(out.ends_with("  Contacts?: Partial<Contact>[];\n};"));
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(
            generate_type_declaration(&object("Empty__c", Vec::new())),
            "type Empty__c = {};"
        );
    }

    #[test]
    fn test_module_prefix_exports_everything() {
        let status = FieldDescription {
            picklist_values: vec![PicklistValue::active("New")],
            restricted_picklist: true,
            ..FieldDescription::new("Status", "picklist")
        };
        let out = Generator::new()
            .module_prefix("sobjects/")
            .generate(&object("Case", vec![status]));

        assert!(out.starts_with("declare module 'sobjects/Case' {\n"));
        assert!(out.contains("  export type Case_Status_Picklist = 'New';\n\n  export type Case = {"));
        assert!(out.contains("    Status?: Case_Status_Picklist;"));
        assert!(out.ends_with("  };\n}"));
    }

    #[test]
    fn test_with_options_indent() {
        let name = FieldDescription::new("Name", "string");
        let out = Generator::with_options(GenerateOptions {
            module_prefix: Some("sobjects/".into()),
            indent: Indent::WIDE,
        })
        .generate(&object("Lead", vec![name]));

        assert!(out.contains("\n    export type Lead = {\n"));
        assert!(out.contains("\n        Name?: string;\n"));
    }

    #[test]
    fn test_declaration_file() {
        let decl = Generator::new().declaration(&object("Contact", Vec::new()));
        assert_eq!(decl.file_name, "Contact.d.ts");
        assert_eq!(decl.object_name, "Contact");
        assert_eq!(decl.content, "type Contact = {};");
    }
}
