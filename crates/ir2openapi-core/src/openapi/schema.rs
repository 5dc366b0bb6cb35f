use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// A bare `$ref` pointer.
    pub fn reference(ref_path: impl Into<String>) -> Self {
        SchemaOrRef::Ref {
            ref_path: ref_path.into(),
            description: None,
        }
    }

    /// Replace the description, on either form.
    pub fn with_description(self, description: Option<String>) -> Self {
        match self {
            SchemaOrRef::Ref { ref_path, .. } => SchemaOrRef::Ref {
                ref_path,
                description,
            },
            SchemaOrRef::Schema(mut schema) => {
                schema.description = description;
                SchemaOrRef::Schema(schema)
            }
        }
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(schema) => Some(schema),
            SchemaOrRef::Ref { .. } => None,
        }
    }

    pub fn ref_path(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Ref { ref_path, .. } => Some(ref_path),
            SchemaOrRef::Schema(_) => None,
        }
    }
}

impl From<Schema> for SchemaOrRef {
    fn from(schema: Schema) -> Self {
        SchemaOrRef::Schema(Box::new(schema))
    }
}

/// An OpenAPI v3 schema object, restricted to the keywords this crate emits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Object properties
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<Box<SchemaOrRef>>,

    // Array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,

    // Composition
    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaOrRef>,

    // Emitted whenever set: an empty `oneOf` matches nothing
    #[serde(rename = "oneOf", default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaOrRef>>,

    // Enum values, emitted whenever set
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl Schema {
    pub fn typed(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    pub fn formatted(schema_type: SchemaType, format: &str) -> Self {
        Self {
            schema_type: Some(schema_type),
            format: Some(format.to_string()),
            ..Default::default()
        }
    }
}
