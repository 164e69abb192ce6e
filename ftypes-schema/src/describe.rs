//! sObject describe payload model.
//!
//! Mirrors the subset of the Salesforce describe result that type generation
//! reads. Attributes not listed here are ignored; `null` optional attributes
//! are treated as absent.

use std::fmt;

use serde::Deserialize;

use crate::{
    Error, Result,
    serde_helpers::{non_empty_string, null_as_default},
};

/// Description of one sObject.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDescription {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// Fields in presentation order.
    pub fields: Vec<FieldDescription>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub child_relationships: Vec<ChildRelationship>,
}

impl ObjectDescription {
    /// Parse a describe document.
    ///
    /// Accepts either the raw describe result or the `{ "status", "result" }`
    /// envelope printed by `sf sobject describe --json`. `sobject` only names
    /// the object in error messages.
    pub fn from_json(sobject: &str, json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::describe(sobject, e))?;
        Self::from_value(sobject, value)
    }

    /// Build a description from an already-parsed JSON value.
    pub fn from_value(sobject: &str, value: serde_json::Value) -> Result<Self> {
        let value = unwrap_envelope(value);
        serde_json::from_value(value).map_err(|e| Error::describe(sobject, e))
    }

    /// Look up a field by API name.
    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Strip the sf CLI `--json` envelope when present.
fn unwrap_envelope(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map)
            if map.contains_key("status") && map.get("result").is_some_and(|r| r.is_object()) =>
        {
            map.remove("result").unwrap_or_default()
        }
        other => other,
    }
}

/// Description of one field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescription {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nillable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub createable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updateable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unique: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_number: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub calculated: bool,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub calculated_formula: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub inline_help_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reference_to: Vec<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub relationship_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub picklist_values: Vec<PicklistValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub restricted_picklist: bool,
}

impl FieldDescription {
    /// Create a field with the given API name and type tag; every flag is false.
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            field_type: field_type.into(),
            ..Default::default()
        }
    }

    /// True when a client can never set this field.
    pub fn is_read_only(&self) -> bool {
        self.calculated || self.auto_number
    }
}

/// One value of a picklist field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicklistValue {
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub label: Option<String>,
}

impl PicklistValue {
    /// Create an active picklist value.
    pub fn active(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            active: true,
            label: None,
        }
    }

    /// Create an inactive picklist value.
    pub fn inactive(value: impl Into<String>) -> Self {
        Self {
            active: false,
            ..Self::active(value)
        }
    }
}

/// Reverse relationship from a parent object to a child referencing it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRelationship {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub child_s_object: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub relationship_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cascade_delete: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub restricted_delete: bool,
}

/// Field type tag.
///
/// Only the tags type generation distinguishes get their own variant; every
/// other tag is kept verbatim in [`FieldType::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    Picklist,
    #[default]
    String,
    TextArea,
    Reference,
    Id,
    Boolean,
    Int,
    Currency,
    Percent,
    Number,
    Double,
    Date,
    DateTime,
    Other(String),
}

impl FieldType {
    /// The tag as it appears in describe results.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Picklist => "picklist",
            Self::String => "string",
            Self::TextArea => "textarea",
            Self::Reference => "reference",
            Self::Id => "id",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Currency => "currency",
            Self::Percent => "percent",
            Self::Number => "number",
            Self::Double => "double",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "picklist" => Self::Picklist,
            "string" => Self::String,
            "textarea" => Self::TextArea,
            "reference" => Self::Reference,
            "id" => Self::Id,
            "boolean" => Self::Boolean,
            "int" => Self::Int,
            "currency" => Self::Currency,
            "percent" => Self::Percent,
            "number" => Self::Number,
            "double" => Self::Double,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
